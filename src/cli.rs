//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::constants::{DEFAULT_CHANCE_LIGHT_STARTS_ON, DEFAULT_NCOLS, DEFAULT_NROWS};
use crate::game::PuzzleConfig;

/// Lights Out in the terminal: switch every light off.
#[derive(Parser, Debug)]
#[command(name = "lightsout", version, about)]
pub struct Cli {
    /// Number of board rows.
    #[arg(short, long, default_value_t = DEFAULT_NROWS)]
    pub rows: usize,

    /// Number of board columns.
    #[arg(short, long, default_value_t = DEFAULT_NCOLS)]
    pub cols: usize,

    /// Chance that each light starts on, between 0 and 1.
    #[arg(short = 'p', long, default_value_t = DEFAULT_CHANCE_LIGHT_STARTS_ON)]
    pub chance: f64,

    /// Seed for reproducible boards.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file. Logging is off without it unless RUST_LOG is set.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn puzzle_config(&self) -> PuzzleConfig {
        PuzzleConfig::new(self.rows, self.cols, self.chance)
    }
}
