//! Side count invariant: neither side grows across a move.

use super::super::{Board, Side};
use super::{Invariant, Transition};
use strum::IntoEnumIterator;

/// Invariant: each side has no more pieces after a move than before it.
pub struct SideCountInvariant;

fn count(board: &Board, side: Side) -> usize {
    board.pieces().filter(|(_, p)| p.side == side).count()
}

impl Invariant<Transition<'_>> for SideCountInvariant {
    fn holds(transition: &Transition<'_>) -> bool {
        Side::iter().all(|side| count(transition.after.board(), side) <= count(transition.before.board(), side))
    }

    fn description() -> &'static str {
        "Neither side gains pieces across a move"
    }
}
