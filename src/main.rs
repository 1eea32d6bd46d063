use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io::stdout, time::Duration};

use lightsout::cli::Cli;
use lightsout::constants::POLL_INTERVAL;
use lightsout::game::Game;
use lightsout::input::{handle_input, handle_mouse};
use lightsout::logging::init_logging;
use lightsout::ui::{board_area, ui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Reject bad settings before touching the terminal
    let config = cli.puzzle_config();
    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(config, seed)?,
        None => Game::new(config)?,
    };

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game);

    // Cleanup
    execute!(terminal.backend_mut(), DisableMouseCapture)?;
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    game: &mut Game,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui(f, game))?;

        if !event::poll(Duration::from_millis(POLL_INTERVAL))? {
            continue;
        }

        match event::read()? {
            Event::Key(KeyEvent { code, kind, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    if kind == KeyEventKind::Press {
                        return Ok(());
                    }
                }
                _ => handle_input(game, code, kind),
            },
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = board_area(size, game.board().nrows(), game.board().ncols());
                handle_mouse(game, mouse, area);
            }
            _ => {}
        }
    }
}
