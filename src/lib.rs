//! Lights Out: a grid of lights where toggling one cell also toggles its
//! four orthogonal neighbours. The puzzle is solved when every light is off.
//!
//! The puzzle logic lives in [`game`]; [`input`] and [`ui`] form the
//! terminal front end that drives it.

pub mod cli;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

pub use game::{Board, Coord, Game, GameState, PuzzleConfig, PuzzleError, PuzzleResult, Snapshot};
