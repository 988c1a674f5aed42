//! Contract-based validation for completed moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. The selection controller only asks for a move once the
//! precondition is known to hold; the postcondition catches controller or
//! board bugs in debug builds.

use super::invariants::{ChessInvariants, InvariantSet, Transition};
use super::state::BoardState;
use super::types::{Cell, Side};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ContractError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), ContractError>;
}

/// A requested move from one cell to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Source cell.
    pub from: Cell,
    /// Destination cell.
    pub to: Cell,
}

/// Contract failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ContractError {
    /// The source cell is empty.
    #[display("No piece on {}", _0)]
    EmptySource(#[error(not(source))] Cell),

    /// The piece on the source belongs to the side not on move.
    #[display("Piece on {} belongs to {}", _0, _1)]
    WrongSide(#[error(not(source))] Cell, #[error(not(source))] Side),

    /// State after the move breaks an invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Contract for completed moves.
///
/// Preconditions:
/// - Source holds a piece
/// - That piece belongs to the side on move
///
/// Postconditions:
/// - Source is empty and destination holds the moved piece
/// - Turn passed to the opponent
/// - Piece count did not grow
/// - No side gained pieces of any kind
pub struct MoveContract;

impl Contract<BoardState, MoveRequest> for MoveContract {
    #[instrument(skip(state))]
    fn pre(state: &BoardState, action: &MoveRequest) -> Result<(), ContractError> {
        match state.board().get(action.from).piece() {
            None => Err(ContractError::EmptySource(action.from)),
            Some(piece) if piece.side != state.current_turn() => {
                Err(ContractError::WrongSide(action.from, piece.side))
            }
            Some(_) => Ok(()),
        }
    }

    #[instrument(skip(before, after))]
    fn post(before: &BoardState, after: &BoardState, action: &MoveRequest) -> Result<(), ContractError> {
        let mut failures = Vec::new();

        if !after.board().get(action.from).is_empty() {
            failures.push("source cell still occupied".to_string());
        }
        if after.board().get(action.to) != before.board().get(action.from) {
            failures.push("destination does not hold the moved piece".to_string());
        }
        if after.current_turn() != before.current_turn().opponent() {
            failures.push("turn did not pass to the opponent".to_string());
        }
        if after.piece_count() > before.piece_count() {
            failures.push("piece count grew".to_string());
        }
        if let Err(violations) = ChessInvariants::check_all(&Transition::new(before, after)) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            warn!(?failures, "Move postcondition failed");
            Err(ContractError::InvariantViolation(format!(
                "Postcondition failed: {}",
                failures.join("; ")
            )))
        }
    }
}
