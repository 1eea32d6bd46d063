use crossterm::event::{KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::warn;
use ratatui::layout::Rect;

use crate::game::{Coord, Game};
use crate::input::direction::InputDirection;
use crate::ui::cell_at;

pub fn handle_input(game: &mut Game, key_code: KeyCode, kind: KeyEventKind) {
    if kind == KeyEventKind::Release {
        return;
    }

    if let Some(dir) = InputDirection::from_key(key_code) {
        let (dr, dc) = dir.delta();
        game.move_cursor(dr, dc);
        return;
    }

    match key_code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            let cursor = game.cursor();
            activate_cell(game, cursor);
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            if let Err(err) = game.new_game() {
                warn!("could not start a new game: {err}");
            }
        }
        _ => {}
    }
}

/// Left clicks inside the board toggle the clicked cell.
pub fn handle_mouse(game: &mut Game, event: MouseEvent, board_area: Rect) {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if let Some(coord) = cell_at(board_area, event.column, event.row) {
        if game.select(coord) {
            activate_cell(game, coord);
        }
    }
}

// Input is frozen once the board is cleared, until a new game starts
fn activate_cell(game: &mut Game, coord: Coord) {
    if game.has_won() {
        return;
    }

    if let Err(err) = game.toggle(coord) {
        warn!("ignored toggle: {err}");
    }
}
