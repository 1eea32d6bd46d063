//! Puzzle configuration.
//!
//! A `PuzzleConfig` is fixed for the lifetime of a game and is what the
//! board is regenerated from when a new game starts.

use crate::constants::{DEFAULT_CHANCE_LIGHT_STARTS_ON, DEFAULT_NCOLS, DEFAULT_NROWS};
use crate::game::error::{PuzzleError, PuzzleResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuzzleConfig {
    /// Number of rows on the board.
    pub nrows: usize,
    /// Number of columns on the board.
    pub ncols: usize,
    /// Chance that any single cell starts lit.
    pub chance_light_starts_on: f64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            nrows: DEFAULT_NROWS,
            ncols: DEFAULT_NCOLS,
            chance_light_starts_on: DEFAULT_CHANCE_LIGHT_STARTS_ON,
        }
    }
}

impl PuzzleConfig {
    #[must_use]
    pub fn new(nrows: usize, ncols: usize, chance_light_starts_on: f64) -> Self {
        Self {
            nrows,
            ncols,
            chance_light_starts_on,
        }
    }

    #[must_use]
    pub fn with_size(mut self, nrows: usize, ncols: usize) -> Self {
        self.nrows = nrows;
        self.ncols = ncols;
        self
    }

    #[must_use]
    pub fn with_chance(mut self, chance_light_starts_on: f64) -> Self {
        self.chance_light_starts_on = chance_light_starts_on;
        self
    }

    /// Check dimensions first, then the probability.
    ///
    /// NaN is rejected along with anything outside `[0, 1]`.
    pub fn validate(&self) -> PuzzleResult<()> {
        if self.nrows < 1 || self.ncols < 1 {
            return Err(PuzzleError::InvalidDimension {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        if !(0.0..=1.0).contains(&self.chance_light_starts_on) {
            return Err(PuzzleError::InvalidProbability(self.chance_light_starts_on));
        }
        Ok(())
    }
}
