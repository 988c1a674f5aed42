//! First-class invariants over board transitions.
//!
//! Any placement is a valid board, so invariants are not properties of a
//! single [`BoardState`] but of a completed move: they compare the state
//! before it with the state after it. They are testable on their own and
//! are checked after each completed move in debug builds.

use super::state::BoardState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The board on either side of one completed move.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// State the move was made from.
    pub before: &'a BoardState,
    /// State the move produced.
    pub after: &'a BoardState,
}

impl<'a> Transition<'a> {
    /// Pairs two states.
    pub fn new(before: &'a BoardState, after: &'a BoardState) -> Self {
        Self { before, after }
    }
}

pub mod piece_supply;
pub mod side_count;

pub use piece_supply::PieceSupplyInvariant;
pub use side_count::SideCountInvariant;

/// All board invariants as a composable set.
pub type ChessInvariants = (PieceSupplyInvariant, SideCountInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::{Kind, Piece, Side, Square};

    #[test]
    fn test_invariant_set_holds_for_unchanged_board() {
        let state = BoardState::new();
        assert!(ChessInvariants::check_all(&Transition::new(&state, &state)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_captures() {
        let before = BoardState::new();
        let mut after = before.clone();
        after.move_piece(7, 3, 1, 3).unwrap();
        after.move_piece(0, 0, 1, 3).unwrap();
        assert!(ChessInvariants::check_all(&Transition::new(&before, &after)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_on_crowded_board() {
        let mut before = BoardState::new();
        for col in 0..8 {
            before
                .set(4, col, Square::Occupied(Piece::new(Side::White, Kind::Queen)))
                .unwrap();
        }
        let mut after = before.clone();
        after.move_piece(4, 0, 1, 0).unwrap();
        assert!(ChessInvariants::check_all(&Transition::new(&before, &after)).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let before = BoardState::new();
        let mut after = before.clone();
        // A pawn appearing from nowhere breaks both the kind and the side count.
        after
            .set(4, 4, Square::Occupied(Piece::new(Side::White, Kind::Pawn)))
            .unwrap();

        let violations = ChessInvariants::check_all(&Transition::new(&before, &after)).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
