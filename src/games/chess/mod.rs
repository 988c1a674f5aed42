//! Two-player chess board without rule enforcement.

pub mod contracts;
pub mod controller;
pub mod error;
pub mod invariants;
pub mod state;
pub mod types;

pub use contracts::{Contract, ContractError, MoveContract, MoveRequest};
pub use controller::{Notification, PresentationSurface, Selection, SelectionController};
pub use error::BoardError;
pub use invariants::{ChessInvariants, Invariant, InvariantSet, InvariantViolation, Transition};
pub use state::{BoardState, MoveOutcome};
pub use types::{BOARD_SIZE, Board, Cell, Kind, Piece, Side, Square};
