//! Terminal UI for Strictly Chess

pub mod app;
pub mod input;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{debug, error, info, instrument};

use crate::config::ChessConfig;
use app::{App, Flow};

/// Run the TUI board.
pub fn run_tui(config: ChessConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly Chess TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_board(&mut terminal, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Board loop error");
    }

    res
}

/// Event loop: each terminal event is handled to completion before the next is read.
#[instrument(skip_all)]
fn run_board(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: &ChessConfig) -> Result<()> {
    let mut app = App::new();

    loop {
        let mut grid = Rect::default();
        terminal.draw(|f| grid = ui::draw(f, &app, config))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code)? == Flow::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match input::cell_at(grid, mouse.column, mouse.row) {
                    Some(cell) => app.click(cell)?,
                    None => debug!(column = mouse.column, row = mouse.row, "Click outside the board"),
                }
            }
            _ => {}
        }
    }
}
