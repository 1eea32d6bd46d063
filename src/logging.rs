//! Logging setup.
//!
//! The game owns the terminal while it runs, so log records only go to a
//! file. Without `--log-file` logging is off, even if `RUST_LOG` is set.
//! With a file, `RUST_LOG` overrides the level picked from `-v`.

use std::fs::File;
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Maps a `-v` count to an env_logger filter.
pub const fn verbosity_to_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builder for the game's logger. Never targets stderr.
pub fn logger_builder(verbosity: u8, log_file: Option<&Path>) -> io::Result<Builder> {
    let Some(path) = log_file else {
        let mut builder = Builder::new();
        builder.filter_level(LevelFilter::Off);
        return Ok(builder);
    };

    let mut builder =
        Builder::from_env(Env::default().default_filter_or(verbosity_to_filter(verbosity)));
    builder.target(Target::Pipe(Box::new(File::create(path)?)));
    Ok(builder)
}

pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> io::Result<()> {
    // Only fails if a logger is already set (e.g. in tests)
    logger_builder(verbosity, log_file)?.try_init().ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(verbosity_to_filter(0), "warn");
        assert_eq!(verbosity_to_filter(1), "info");
        assert_eq!(verbosity_to_filter(2), "debug");
        assert_eq!(verbosity_to_filter(9), "trace");
    }

    #[test]
    fn test_no_log_file_means_off_despite_rust_log() {
        std::env::set_var("RUST_LOG", "debug");
        let logger = logger_builder(3, None).unwrap().build();
        std::env::remove_var("RUST_LOG");

        assert_eq!(logger.filter(), LevelFilter::Off);
    }

    #[test]
    fn test_log_file_uses_verbosity() {
        let path = std::env::temp_dir().join(format!("lightsout-log-{}.txt", std::process::id()));
        let logger = logger_builder(2, Some(&path)).unwrap().build();
        std::fs::remove_file(&path).ok();

        // RUST_LOG may be set by the caller's environment
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(logger.filter(), LevelFilter::Debug);
        }
    }
}
