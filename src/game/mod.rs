pub mod board;
pub mod config;
pub mod error;
pub mod state;

pub use board::{Board, Coord};
pub use config::PuzzleConfig;
pub use error::{PuzzleError, PuzzleResult};
pub use state::{Game, GameState, Snapshot};
