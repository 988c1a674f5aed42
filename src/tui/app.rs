//! Application state and logic.

use crate::games::chess::{BoardError, Cell, Notification, PresentationSurface, SelectionController, Square};
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

use super::input::move_cursor;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
pub struct App {
    controller: SelectionController,
    cursor: Cell,
    highlighted: Option<Cell>,
    status_message: String,
}

impl App {
    /// Creates a new application with the opening layout.
    pub fn new() -> Self {
        let controller = SelectionController::new();
        let status_message = turn_message(&controller);
        Self {
            controller,
            cursor: Cell::clamped(7, 4),
            highlighted: None,
            status_message,
        }
    }

    /// Gets the controller (board, turn and selection).
    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Cell currently drawn as selected.
    pub fn highlighted(&self) -> Option<Cell> {
        self.highlighted
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Clicks a cell and applies the resulting notifications.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError`] from the controller; the board is unchanged.
    #[instrument(skip(self))]
    pub fn click(&mut self, cell: Cell) -> Result<(), BoardError> {
        self.cursor = cell;
        let turn_before = self.controller.state().current_turn();
        for notification in self.controller.click(cell)? {
            self.notify(&notification);
        }
        if self.controller.state().current_turn() != turn_before {
            self.status_message = format!("{} {}", self.status_message, turn_message(&self.controller));
        }
        Ok(())
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError`] from a click.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<Flow, BoardError> {
        match key {
            KeyCode::Char('q') => return Ok(Flow::Quit),
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor)?,
            KeyCode::Esc => {
                if let Some(notification) = self.controller.cancel() {
                    self.notify(&notification);
                    self.status_message = turn_message(&self.controller);
                }
            }
            KeyCode::Char('r') => self.restart(),
            other => self.cursor = move_cursor(self.cursor, other),
        }
        Ok(Flow::Continue)
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.controller = SelectionController::new();
        self.highlighted = None;
        self.status_message = format!("Game restarted. {}", turn_message(&self.controller));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSurface for App {
    fn notify(&mut self, notification: &Notification) {
        debug!(?notification, "Applying notification");

        match *notification {
            Notification::HighlightCell { cell } => {
                self.highlighted = Some(cell);
                if let Some(piece) = self.controller.state().board().get(cell).piece() {
                    self.status_message = format!("{} on {} selected.", piece, cell);
                }
            }
            Notification::UnhighlightCell { cell } => {
                if self.highlighted == Some(cell) {
                    self.highlighted = None;
                }
            }
            Notification::RedrawCell { cell, square } => {
                // The board is repainted from state every frame; only the
                // destination's redraw carries news worth reporting.
                if let Square::Occupied(piece) = square {
                    self.status_message = format!("{} moved to {}.", piece, cell);
                }
            }
        }
    }
}

fn turn_message(controller: &SelectionController) -> String {
    format!("{} to move.", controller.state().current_turn())
}
