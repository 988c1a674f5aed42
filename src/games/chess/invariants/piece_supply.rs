//! Piece supply invariant: no side gains pieces of any kind across a move.

use super::super::{Board, Kind, Side};
use super::{Invariant, Transition};
use strum::IntoEnumIterator;

/// Invariant: per side and kind, the count after a move is at most the
/// count before it.
///
/// Moves relocate or capture; they never create or promote.
pub struct PieceSupplyInvariant;

fn count(board: &Board, side: Side, kind: Kind) -> usize {
    board
        .pieces()
        .filter(|(_, p)| p.side == side && p.kind == kind)
        .count()
}

impl Invariant<Transition<'_>> for PieceSupplyInvariant {
    fn holds(transition: &Transition<'_>) -> bool {
        let (before, after) = (transition.before.board(), transition.after.board());
        Side::iter().all(|side| Kind::iter().all(|kind| count(after, side, kind) <= count(before, side, kind)))
    }

    fn description() -> &'static str {
        "No side gains pieces of any kind across a move"
    }
}
