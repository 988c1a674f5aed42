//! Board error types.

/// Errors raised by board reads and mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A coordinate fell outside the 8x8 grid.
    #[display("Cell ({}, {}) is outside the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// A move was requested from a cell with nothing on it.
    #[display("No piece to move at ({}, {})", row, col)]
    EmptySource {
        /// Source row.
        row: usize,
        /// Source column.
        col: usize,
    },
}
