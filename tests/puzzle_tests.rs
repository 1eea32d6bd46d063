//! Puzzle engine tests driven through the public API.

use lightsout::{Board, Coord, Game, PuzzleConfig, PuzzleError};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const F: bool = false;
const T: bool = true;

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_default_game_is_three_by_three() {
    let game = Game::new(PuzzleConfig::default()).unwrap();
    assert_eq!(game.board().nrows(), 3);
    assert_eq!(game.board().ncols(), 3);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_zero_and_full_chance() {
    let dark = Game::with_seed(PuzzleConfig::new(4, 7, 0.0), 5).unwrap();
    assert!(dark.has_won());
    assert_eq!(dark.board().lit_count(), 0);

    let lit = Game::with_seed(PuzzleConfig::new(4, 7, 1.0), 5).unwrap();
    assert!(!lit.has_won());
    assert_eq!(lit.board().lit_count(), 28);
}

#[test]
fn test_invalid_configs() {
    assert_eq!(
        Game::new(PuzzleConfig::new(3, 0, 0.4)).err(),
        Some(PuzzleError::InvalidDimension { nrows: 3, ncols: 0 })
    );
    assert_eq!(
        Game::new(PuzzleConfig::new(3, 3, 1.2)).err(),
        Some(PuzzleError::InvalidProbability(1.2))
    );
}

#[test]
fn test_lit_ratio_tracks_chance() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let board = Board::random(&PuzzleConfig::new(100, 100, 0.4), &mut rng).unwrap();

    let ratio = board.lit_count() as f64 / 10_000.0;
    assert!((0.35..0.45).contains(&ratio), "lit ratio {ratio}");
}

// =============================================================================
// Toggle
// =============================================================================

#[test]
fn test_scenario_toggle_edge_cell() {
    let board = Board::from_rows(vec![vec![F, F, F], vec![T, T, F], vec![F, F, F]]).unwrap();
    let mut game = Game::from_board(PuzzleConfig::default(), board, 0).unwrap();
    assert!(!game.has_won());

    game.toggle(Coord::new(1, 0)).unwrap();

    let expected = Board::from_rows(vec![vec![T, F, F], vec![F, F, F], vec![T, F, F]]).unwrap();
    assert_eq!(game.board(), &expected);
    assert!(!game.has_won());

    let snapshot = game.snapshot();
    assert_eq!(snapshot.board, expected);
    assert!(!snapshot.won);
    assert_eq!(snapshot.moves, 1);
}

#[test]
fn test_scenario_via_coordinate_key() {
    let board = Board::from_rows(vec![vec![F, F, F], vec![T, T, F], vec![F, F, F]]).unwrap();
    let mut game = Game::from_board(PuzzleConfig::default(), board, 0).unwrap();

    game.toggle_key("1-0").unwrap();
    assert_eq!(game.board().rows()[0], vec![T, F, F]);
    assert_eq!(game.board().rows()[2], vec![T, F, F]);
}

#[test]
fn test_out_of_range_centre_reported() {
    let mut game = Game::with_seed(PuzzleConfig::default(), 3).unwrap();
    let before = game.board().clone();

    assert_eq!(
        game.toggle(Coord::new(-1, 0)),
        Err(PuzzleError::CoordinateOutOfRange {
            coord: Coord::new(-1, 0),
            nrows: 3,
            ncols: 3
        })
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_solve_by_toggling_plus() {
    let mut game = Game::with_seed(PuzzleConfig::new(5, 5, 0.0), 1).unwrap();
    game.toggle(Coord::new(2, 2)).unwrap();
    assert_eq!(game.board().lit_count(), 5);
    assert!(!game.has_won());

    game.toggle(Coord::new(2, 2)).unwrap();
    assert!(game.has_won());
    assert_eq!(game.moves(), 2);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn random_board_has_requested_shape(
        nrows in 1usize..20,
        ncols in 1usize..20,
        chance in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = Board::random(&PuzzleConfig::new(nrows, ncols, chance), &mut rng).unwrap();
        prop_assert_eq!(board.nrows(), nrows);
        prop_assert_eq!(board.ncols(), ncols);
        prop_assert!(board.rows().iter().all(|row| row.len() == ncols));
    }

    #[test]
    fn toggle_twice_restores_board(
        nrows in 1usize..10,
        ncols in 1usize..10,
        seed in any::<u64>(),
        pick in any::<(usize, usize)>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let original = Board::random(&PuzzleConfig::new(nrows, ncols, 0.5), &mut rng).unwrap();
        let coord = Coord::new((pick.0 % nrows) as i32, (pick.1 % ncols) as i32);

        let mut board = original.clone();
        board.toggle(coord).unwrap();
        prop_assert_ne!(&board, &original);
        board.toggle(coord).unwrap();
        prop_assert_eq!(board, original);
    }

    #[test]
    fn toggle_flips_only_in_range_plus(
        nrows in 1usize..10,
        ncols in 1usize..10,
        pick in any::<(usize, usize)>(),
    ) {
        let r = (pick.0 % nrows) as i32;
        let c = (pick.1 % ncols) as i32;
        let mut board = Board::from_rows(vec![vec![false; ncols]; nrows]).unwrap();
        board.toggle(Coord::new(r, c)).unwrap();

        let expected = [(0, 0), (0, -1), (0, 1), (1, 0), (-1, 0)]
            .iter()
            .filter(|(dr, dc)| board.contains(Coord::new(r + dr, c + dc)))
            .count();
        prop_assert_eq!(board.lit_count(), expected);
    }
}
