//! Ground truth of piece placement and turn ownership.

use super::error::BoardError;
use super::types::{Board, Cell, Piece, Side, Square};
use tracing::{debug, instrument};

/// What happened when a piece was moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece that moved.
    pub moved: Piece,
    /// Whatever stood on the destination before the move.
    pub captured: Option<Piece>,
}

/// Board plus the side to move.
///
/// Holds no interaction logic: any placement is accepted and moves are
/// not checked for legality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    turn: Side,
}

impl BoardState {
    /// Opening layout, White to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::White,
        }
    }

    /// Wraps an arbitrary board with the given side to move.
    pub fn from_board(board: Board, turn: Side) -> Self {
        Self { board, turn }
    }

    /// Read-only view of the grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the contents of `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if either coordinate is outside `0..8`.
    pub fn get(&self, row: i32, col: i32) -> Result<Square, BoardError> {
        Ok(self.board.get(Cell::new(row, col)?))
    }

    /// Overwrites `(row, col)` unconditionally.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if either coordinate is outside `0..8`.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: i32, col: i32, square: Square) -> Result<(), BoardError> {
        self.board.set(Cell::new(row, col)?, square);
        Ok(())
    }

    /// Moves the piece at the source onto the destination and clears the source.
    ///
    /// Anything on the destination is discarded.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] for any bad coordinate, or
    /// [`BoardError::EmptySource`] if the source is empty. The board is
    /// untouched on error.
    pub fn move_piece(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<MoveOutcome, BoardError> {
        let from = Cell::new(from_row, from_col)?;
        let to = Cell::new(to_row, to_col)?;
        self.move_between(from, to)
    }

    /// [`BoardState::move_piece`] for already validated cells.
    ///
    /// # Errors
    ///
    /// [`BoardError::EmptySource`] if `from` is empty.
    #[instrument(skip_all, fields(from = %from, to = %to))]
    pub fn move_between(&mut self, from: Cell, to: Cell) -> Result<MoveOutcome, BoardError> {
        let moved = self.board.get(from).piece().ok_or(BoardError::EmptySource {
            row: from.row(),
            col: from.col(),
        })?;
        // Moving a piece onto its own cell leaves it in place.
        if from == to {
            return Ok(MoveOutcome { moved, captured: None });
        }

        let captured = self.board.get(to).piece();
        self.board.set(to, Square::Occupied(moved));
        self.board.set(from, Square::Empty);

        debug!(piece = %moved, captured = ?captured, "Piece moved");
        Ok(MoveOutcome { moved, captured })
    }

    /// The side allowed to select and move next.
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    /// Flips White to Black and back.
    #[instrument(skip(self), fields(from = %self.turn))]
    pub fn toggle_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// True when `cell` holds a piece of the side to move.
    pub fn is_own_piece(&self, cell: Cell) -> bool {
        self.board.get(cell).belongs_to(self.turn)
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.board.pieces().count()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::Kind;

    #[test]
    fn test_new_state_white_to_move() {
        let state = BoardState::new();
        assert_eq!(state.current_turn(), Side::White);
        assert_eq!(state.piece_count(), 32);
    }

    #[test]
    fn test_toggle_turn_alternates() {
        let mut state = BoardState::new();
        state.toggle_turn();
        assert_eq!(state.current_turn(), Side::Black);
        state.toggle_turn();
        assert_eq!(state.current_turn(), Side::White);
    }

    #[test]
    fn test_move_to_empty_cell() {
        let mut state = BoardState::new();
        let outcome = state.move_piece(6, 0, 4, 0).unwrap();
        assert_eq!(outcome.moved, Piece::new(Side::White, Kind::Pawn));
        assert_eq!(outcome.captured, None);
        assert_eq!(state.get(6, 0).unwrap(), Square::Empty);
        assert_eq!(state.get(4, 0).unwrap(), Square::Occupied(outcome.moved));
        assert_eq!(state.piece_count(), 32);
    }

    #[test]
    fn test_move_captures_silently() {
        let mut state = BoardState::new();
        let outcome = state.move_piece(7, 3, 0, 3).unwrap();
        assert_eq!(outcome.captured, Some(Piece::new(Side::Black, Kind::Queen)));
        assert_eq!(state.piece_count(), 31);
    }

    #[test]
    fn test_move_from_empty_is_error() {
        let mut state = BoardState::new();
        let before = state.clone();
        assert_eq!(
            state.move_piece(4, 4, 3, 3),
            Err(BoardError::EmptySource { row: 4, col: 4 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_onto_itself_keeps_piece() {
        let mut state = BoardState::new();
        let outcome = state.move_piece(6, 4, 6, 4).unwrap();
        assert_eq!(outcome.captured, None);
        assert!(state.get(6, 4).unwrap().belongs_to(Side::White));
        assert_eq!(state.piece_count(), 32);
    }

    #[test]
    fn test_set_accepts_any_placement() {
        let mut state = BoardState::new();
        let king = Square::Occupied(Piece::new(Side::Black, Kind::King));
        state.set(4, 4, king).unwrap();
        assert_eq!(state.get(4, 4).unwrap(), king);
    }
}
