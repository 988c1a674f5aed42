//! Click-driven selection state machine.
//!
//! The controller turns cell clicks into board mutations and emits
//! [`Notification`]s describing what the presentation surface must repaint.
//! It never touches a UI toolkit directly.

#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract, MoveRequest};
use super::error::BoardError;
use super::state::BoardState;
use super::types::{Cell, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Transient selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// A piece of the side to move is chosen as a move source.
    PieceSelected(Cell),
}

/// Repaint instruction for the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notification {
    /// Mark the cell as selected.
    HighlightCell {
        /// Selected cell.
        cell: Cell,
    },
    /// Restore the cell's checkerboard shade.
    UnhighlightCell {
        /// Previously selected cell.
        cell: Cell,
    },
    /// Cell contents changed.
    RedrawCell {
        /// Changed cell.
        cell: Cell,
        /// New contents.
        square: Square,
    },
}

/// Receiver of repaint instructions.
pub trait PresentationSurface {
    /// Applies one notification.
    fn notify(&mut self, notification: &Notification);
}

impl PresentationSurface for Vec<Notification> {
    fn notify(&mut self, notification: &Notification) {
        self.push(*notification);
    }
}

/// Interprets clicks against the board and current selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: BoardState,
    selection: Selection,
}

impl SelectionController {
    /// Fresh session: opening layout, White to move, nothing selected.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller over an existing board state.
    pub fn with_state(state: BoardState) -> Self {
        Self {
            state,
            selection: Selection::Idle,
        }
    }

    /// Board and turn.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Handles one click and returns the emitted notifications in order.
    ///
    /// Invalid clicks (empty cell or enemy piece with nothing selected)
    /// emit nothing.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] for coordinates off the grid, which means
    /// the caller is broken. Board, turn and selection are unchanged when an
    /// error is returned.
    #[instrument(skip(self), fields(turn = %self.state.current_turn(), selection = ?self.selection))]
    pub fn on_cell_clicked(&mut self, row: i32, col: i32) -> Result<Vec<Notification>, BoardError> {
        let cell = Cell::new(row, col).inspect_err(|e| {
            error!(error = %e, "Click outside the board; presentation surface bug");
        })?;
        self.click(cell)
    }

    /// Handles one click and forwards the notifications to `surface`.
    ///
    /// # Errors
    ///
    /// Same as [`SelectionController::on_cell_clicked`]. Nothing is sent to
    /// `surface` on error.
    pub fn dispatch<P: PresentationSurface>(
        &mut self,
        row: i32,
        col: i32,
        surface: &mut P,
    ) -> Result<(), BoardError> {
        for notification in self.on_cell_clicked(row, col)? {
            surface.notify(&notification);
        }
        Ok(())
    }

    /// Handles a click on a validated cell.
    ///
    /// # Errors
    ///
    /// [`BoardError::EmptySource`] if the selected cell was emptied behind
    /// the controller's back.
    pub fn click(&mut self, cell: Cell) -> Result<Vec<Notification>, BoardError> {
        let mut out = Vec::new();

        match self.selection {
            Selection::Idle => self.select(cell, &mut out),
            Selection::PieceSelected(selected) if self.state.is_own_piece(cell) => {
                debug!(from = %selected, to = %cell, "Reselecting");
                out.push(Notification::UnhighlightCell { cell: selected });
                self.selection = Selection::Idle;
                self.select(cell, &mut out);
            }
            Selection::PieceSelected(selected) => {
                self.complete_move(selected, cell, &mut out)?;
            }
        }

        Ok(out)
    }

    /// Drops any selection, returning the unhighlight needed, if any.
    pub fn cancel(&mut self) -> Option<Notification> {
        match std::mem::take(&mut self.selection) {
            Selection::Idle => None,
            Selection::PieceSelected(cell) => Some(Notification::UnhighlightCell { cell }),
        }
    }

    /// Idle-state handling: select an own piece, ignore anything else.
    fn select(&mut self, cell: Cell, out: &mut Vec<Notification>) {
        if self.state.is_own_piece(cell) {
            debug!(cell = %cell, "Piece selected");
            self.selection = Selection::PieceSelected(cell);
            out.push(Notification::HighlightCell { cell });
        } else {
            debug!(cell = %cell, "Ignoring click");
        }
    }

    fn complete_move(&mut self, from: Cell, to: Cell, out: &mut Vec<Notification>) -> Result<(), BoardError> {
        #[cfg(debug_assertions)]
        let (action, before) = (MoveRequest { from, to }, self.state.clone());
        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::pre(&before, &action) {
            error!(error = %e, "Selection does not satisfy move precondition");
        }

        let outcome = self.state.move_between(from, to).inspect_err(|e| {
            error!(error = %e, "Selected cell lost its piece");
        })?;
        self.state.toggle_turn();
        self.selection = Selection::Idle;

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, &self.state, &action) {
            error!(error = %e, "Move broke board invariants");
            debug_assert!(false, "{}", e);
        }

        info!(
            piece = %outcome.moved,
            from = %from,
            to = %to,
            captured = ?outcome.captured,
            next = %self.state.current_turn(),
            "Move completed"
        );

        out.push(Notification::UnhighlightCell { cell: from });
        out.push(Notification::RedrawCell {
            cell: from,
            square: Square::Empty,
        });
        out.push(Notification::RedrawCell {
            cell: to,
            square: Square::Occupied(outcome.moved),
        });
        Ok(())
    }
}
