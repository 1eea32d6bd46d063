use thiserror::Error;

use crate::game::board::Coord;

/// Errors raised by the puzzle engine.
///
/// Every check runs before the board is touched, so a failed call leaves
/// the puzzle exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PuzzleError {
    /// A board needs at least one row and one column.
    #[error("invalid board dimensions {nrows}x{ncols}: both must be at least 1")]
    InvalidDimension { nrows: usize, ncols: usize },

    /// The chance a light starts on must lie in `[0, 1]`.
    #[error("invalid chance of a light starting on: {0} (expected a value in [0, 1])")]
    InvalidProbability(f64),

    /// The toggled cell itself is not on the board.
    #[error("coordinate {coord} is outside the {nrows}x{ncols} board")]
    CoordinateOutOfRange {
        coord: Coord,
        nrows: usize,
        ncols: usize,
    },

    /// Explicit rows passed to a board differ in length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A coordinate key was not of the form `row-col`.
    #[error("invalid coordinate key {0:?} (expected \"row-col\")")]
    InvalidCoordinateKey(String),
}

pub type PuzzleResult<T> = Result<T, PuzzleError>;
