use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::game::board::{Board, Coord};
use crate::game::config::PuzzleConfig;
use crate::game::error::PuzzleResult;

/// Derived from the board, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Playing,
    Won,
}

/// What the presentation layer reads back after every move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub won: bool,
    pub moves: u32,
}

/// One puzzle session: the board plus the configuration it was generated
/// from. The board is only ever changed through `toggle`.
pub struct Game {
    config: PuzzleConfig,
    board: Board,
    rng: ChaCha8Rng,
    cursor: Coord,
    moves: u32,
}

impl Game {
    /// Start a game with an entropy-seeded generator.
    pub fn new(config: PuzzleConfig) -> PuzzleResult<Self> {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Start a game whose boards are reproducible from `seed`.
    pub fn with_seed(config: PuzzleConfig, seed: u64) -> PuzzleResult<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Start a game on an explicit board. New games regenerate from `config`.
    pub fn from_board(config: PuzzleConfig, board: Board, seed: u64) -> PuzzleResult<Self> {
        // The board decides the size; only the chance comes from `config`
        let config = config.with_size(board.nrows(), board.ncols());
        config.validate()?;
        Ok(Self {
            config,
            board,
            rng: ChaCha8Rng::seed_from_u64(seed),
            cursor: Coord::new(0, 0),
            moves: 0,
        })
    }

    fn with_rng(config: PuzzleConfig, mut rng: ChaCha8Rng) -> PuzzleResult<Self> {
        let board = Board::random(&config, &mut rng)?;
        info!(
            "new {}x{} game, {} lights on",
            board.nrows(),
            board.ncols(),
            board.lit_count()
        );
        Ok(Self {
            config,
            board,
            rng,
            cursor: Coord::new(0, 0),
            moves: 0,
        })
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Successful toggles since the current board was dealt.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn has_won(&self) -> bool {
        self.board.has_won()
    }

    pub fn game_state(&self) -> GameState {
        if self.has_won() {
            GameState::Won
        } else {
            GameState::Playing
        }
    }

    /// Toggle the light at `coord` and its neighbours.
    pub fn toggle(&mut self, coord: Coord) -> PuzzleResult<()> {
        self.board.toggle(coord)?;
        self.moves += 1;
        debug!("toggled {} (move {})", coord, self.moves);

        if self.has_won() {
            info!("board cleared in {} moves", self.moves);
        }
        Ok(())
    }

    /// Toggle using a `row-col` coordinate key.
    pub fn toggle_key(&mut self, key: &str) -> PuzzleResult<()> {
        let coord = key.parse()?;
        self.toggle(coord)
    }

    pub fn toggle_at_cursor(&mut self) -> PuzzleResult<()> {
        self.toggle(self.cursor)
    }

    /// Move the cursor, clamping at the board edges.
    pub fn move_cursor(&mut self, dr: i32, dc: i32) {
        let max_row = i32::try_from(self.board.nrows()).unwrap_or(i32::MAX) - 1;
        let max_col = i32::try_from(self.board.ncols()).unwrap_or(i32::MAX) - 1;
        let target = Coord::new(
            self.cursor.row.saturating_add(dr),
            self.cursor.col.saturating_add(dc),
        );
        self.cursor = Coord::new(target.row.clamp(0, max_row), target.col.clamp(0, max_col));
    }

    /// Put the cursor on `coord`. Positions off the board are ignored.
    pub fn select(&mut self, coord: Coord) -> bool {
        if !self.board.contains(coord) {
            return false;
        }
        self.cursor = coord;
        true
    }

    /// Discard the current board and deal a fresh one from the same config.
    pub fn new_game(&mut self) -> PuzzleResult<()> {
        self.board = Board::random(&self.config, &mut self.rng)?;
        self.cursor = Coord::new(0, 0);
        self.moves = 0;
        info!(
            "new {}x{} game, {} lights on",
            self.board.nrows(),
            self.board.ncols(),
            self.board.lit_count()
        );
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            won: self.has_won(),
            moves: self.moves,
        }
    }
}
