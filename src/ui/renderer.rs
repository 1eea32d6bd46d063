use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{CELL_HEIGHT, CELL_WIDTH, INFO_PANEL_WIDTH};
use crate::game::{Coord, Game, GameState, Snapshot};

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();
    let snapshot = game.snapshot();

    let board_area = board_area(size, snapshot.board.nrows(), snapshot.board.ncols());
    let info_area = Rect {
        x: board_area.right(),
        y: board_area.y,
        width: INFO_PANEL_WIDTH.min(size.right().saturating_sub(board_area.right())),
        height: board_area.height.max(8).min(size.bottom().saturating_sub(board_area.y)),
    };

    render_board(f, &snapshot, game.cursor(), board_area);
    render_info(f, &snapshot, info_area);

    if game.game_state() == GameState::Won {
        render_won_overlay(f, &snapshot, size);
    }
}

/// Where the board (including its border) sits inside `size`: centred,
/// shifted left to leave room for the info panel.
pub fn board_area(size: Rect, nrows: usize, ncols: usize) -> Rect {
    let board_height = saturating_u16(nrows).saturating_mul(CELL_HEIGHT).saturating_add(2);
    let board_width = saturating_u16(ncols).saturating_mul(CELL_WIDTH).saturating_add(2);

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(INFO_PANEL_WIDTH),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Map a terminal position to the board cell drawn there, if any.
pub fn cell_at(board_area: Rect, column: u16, row: u16) -> Option<Coord> {
    let inner = Rect {
        x: board_area.x + 1,
        y: board_area.y + 1,
        width: board_area.width.saturating_sub(2),
        height: board_area.height.saturating_sub(2),
    };

    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }

    let r = (row - inner.y) / CELL_HEIGHT;
    let c = (column - inner.x) / CELL_WIDTH;
    Some(Coord::new(i32::from(r), i32::from(c)))
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, cursor: Coord, area: Rect) {
    let mut board_lines = Vec::new();

    for (r, row) in snapshot.board.rows().iter().enumerate() {
        let mut line_spans = Vec::new();
        for (c, &lit) in row.iter().enumerate() {
            let mut style = if lit {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let here = Coord::new(
                i32::try_from(r).unwrap_or(i32::MAX),
                i32::try_from(c).unwrap_or(i32::MAX),
            );
            if !snapshot.won && cursor == here {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let glyph = if lit { "██" } else { "░░" };
            line_spans.push(Span::styled(format!(" {glyph} "), style));
        }

        // Each board row is CELL_HEIGHT terminal rows tall
        let line = Line::from(line_spans);
        for _ in 0..CELL_HEIGHT {
            board_lines.push(line.clone());
        }
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("Lights Out"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let status = if snapshot.won {
        Span::styled("Solved", Style::default().fg(Color::Green))
    } else {
        Span::styled("Playing", Style::default().fg(Color::Cyan))
    };

    let info_text = vec![
        Line::from(vec![status]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Moves: {}", snapshot.moves))]),
        Line::from(vec![Span::raw(format!("Lit: {}", snapshot.board.lit_count()))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("N new game")]),
        Line::from(vec![Span::raw("Q quit")]),
    ];

    let info_widget = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(info_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_won_overlay(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let popup_area = centered_rect(40, 30, area);
    f.render_widget(Clear, popup_area);

    let won_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "Congrats, you won!",
            Style::default().fg(Color::Green),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Moves: {}", snapshot.moves))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press N for a new game")]),
        Line::from(vec![Span::raw("Press Q to quit")]),
    ];

    let won_widget = Paragraph::new(won_text)
        .block(Block::default().borders(Borders::ALL).title("Solved"))
        .alignment(Alignment::Center);

    f.render_widget(won_widget, popup_area);
}
