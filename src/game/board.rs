use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::game::config::PuzzleConfig;
use crate::game::error::{PuzzleError, PuzzleResult};

/// A cell address. Signed so that requests falling off the board can be
/// represented and rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Parses the `row-col` key form, e.g. `"1-0"`.
impl FromStr for Coord {
    type Err = PuzzleError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || PuzzleError::InvalidCoordinateKey(key.to_string());

        // Split on the first '-' past index 0 so "-1-0" still parses
        let split = key
            .char_indices()
            .skip(1)
            .find(|&(_, ch)| ch == '-')
            .map(|(idx, _)| idx)
            .ok_or_else(invalid)?;

        let row = key[..split].trim().parse().map_err(|_| invalid())?;
        let col = key[split + 1..].trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(row, col))
    }
}

/// The centre cell followed by its four orthogonal neighbours.
const TOGGLE_PATTERN: [(i32, i32); 5] = [(0, 0), (0, -1), (0, 1), (1, 0), (-1, 0)];

/// Grid of lights, `true` meaning lit. Rows always share one length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<bool>>,
    ncols: usize,
}

impl Board {
    /// Generate a board where each cell is lit independently with the
    /// configured chance.
    pub fn random<R: Rng + ?Sized>(config: &PuzzleConfig, rng: &mut R) -> PuzzleResult<Self> {
        config.validate()?;

        let cells = (0..config.nrows)
            .map(|_| {
                (0..config.ncols)
                    .map(|_| rng.gen_bool(config.chance_light_starts_on))
                    .collect()
            })
            .collect();

        Ok(Self {
            cells,
            ncols: config.ncols,
        })
    }

    /// Build a board from explicit rows.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> PuzzleResult<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 {
            return Err(PuzzleError::InvalidDimension { nrows, ncols });
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != ncols)
        {
            return Err(PuzzleError::RaggedRows {
                row,
                expected: ncols,
                found,
            });
        }

        Ok(Self { cells: rows, ncols })
    }

    pub fn nrows(&self) -> usize {
        self.cells.len()
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.index(coord).map(|(r, c)| self.cells[r][c])
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&lit| lit).count()
    }

    /// Flip the cell at `coord` and its orthogonal neighbours.
    ///
    /// Neighbours that fall off the board are skipped. The centre must be
    /// on the board; otherwise nothing changes and an error is returned.
    pub fn toggle(&mut self, coord: Coord) -> PuzzleResult<()> {
        if !self.contains(coord) {
            return Err(PuzzleError::CoordinateOutOfRange {
                coord,
                nrows: self.nrows(),
                ncols: self.ncols(),
            });
        }

        for (dr, dc) in TOGGLE_PATTERN {
            self.flip_cell(coord.offset(dr, dc));
        }
        Ok(())
    }

    /// True once every light is out.
    pub fn has_won(&self) -> bool {
        !self.cells.iter().any(|row| row.contains(&true))
    }

    // Flip if on the board
    fn flip_cell(&mut self, coord: Coord) {
        if let Some((r, c)) = self.index(coord) {
            self.cells[r][c] = !self.cells[r][c];
        }
    }

    fn index(&self, coord: Coord) -> Option<(usize, usize)> {
        let r = usize::try_from(coord.row).ok()?;
        let c = usize::try_from(coord.col).ok()?;
        (r < self.nrows() && c < self.ncols).then_some((r, c))
    }
}
