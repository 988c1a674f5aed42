//! Strictly Chess library - a two-player chess board without rule enforcement.
//!
//! Any piece may move to any square. The crate models the board and a
//! click-driven selection state machine, and ships a terminal presentation
//! surface for it.
//!
//! # Architecture
//!
//! - **BoardState**: piece placement and the side to move
//! - **SelectionController**: turns cell clicks into moves and emits
//!   repaint [`Notification`]s
//! - **TUI**: ratatui board that renders state and feeds clicks back
//!
//! # Example
//!
//! ```
//! use strictly_chess::{Selection, SelectionController, Side};
//!
//! let mut controller = SelectionController::new();
//! controller.on_cell_clicked(6, 0)?; // White pawn
//! controller.on_cell_clicked(4, 0)?; // empty cell
//! assert_eq!(controller.state().current_turn(), Side::Black);
//! assert_eq!(controller.selection(), Selection::Idle);
//! # Ok::<(), strictly_chess::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
pub mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ChessConfig, ConfigError};

// Crate-level exports - Chess core
pub use games::chess::{
    BOARD_SIZE, Board, BoardError, BoardState, Cell, ChessInvariants, Contract, ContractError, Invariant,
    InvariantSet, InvariantViolation, Kind, MoveContract, MoveOutcome, MoveRequest, Notification, Piece,
    PresentationSurface, Selection, SelectionController, Side, Square, Transition,
};
