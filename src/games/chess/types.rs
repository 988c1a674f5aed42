//! Core domain types for the chess board.

use super::error::BoardError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Number of ranks and files on the board.
pub const BOARD_SIZE: usize = 8;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display)]
pub enum Side {
    /// White moves first and starts on row 7.
    White,
    /// Black starts on row 0.
    Black,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// The six kinds of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display)]
pub enum Kind {
    /// Pawn.
    Pawn,
    /// Rook.
    Rook,
    /// Knight.
    Knight,
    /// Bishop.
    Bishop,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Kind {
    /// Back-rank order from column 0 to column 7.
    pub const BACK_RANK: [Kind; BOARD_SIZE] = [
        Kind::Rook,
        Kind::Knight,
        Kind::Bishop,
        Kind::Queen,
        Kind::King,
        Kind::Bishop,
        Kind::Knight,
        Kind::Rook,
    ];

    /// How many of this kind each side starts with.
    pub fn opening_count(self) -> usize {
        match self {
            Kind::Pawn => 8,
            Kind::Rook | Kind::Knight | Kind::Bishop => 2,
            Kind::Queen | Kind::King => 1,
        }
    }

    /// Lowercase letter used in text renderings.
    pub fn letter(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Rook => 'r',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Queen => 'q',
            Kind::King => 'k',
        }
    }
}

/// A piece: which side owns it and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Piece {
    /// Owning side.
    pub side: Side,
    /// Piece kind.
    pub kind: Kind,
}

impl Piece {
    /// Letter for text renderings, uppercase for White.
    pub fn letter(&self) -> char {
        match self.side {
            Side::White => self.kind.letter().to_ascii_uppercase(),
            Side::Black => self.kind.letter(),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}

/// Contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nothing on the cell.
    #[default]
    Empty,
    /// Cell holds a piece.
    Occupied(Piece),
}

impl Square {
    /// Returns the occupant, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(piece),
        }
    }

    /// True when nothing stands on the cell.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// True when the occupant belongs to `side`.
    pub fn belongs_to(self, side: Side) -> bool {
        matches!(self, Square::Occupied(piece) if piece.side == side)
    }
}

/// A validated grid address, both axes in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Validates raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either coordinate falls outside `0..8`.
    pub fn new(row: i32, col: i32) -> Result<Self, BoardError> {
        let in_range = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Builds a cell, pinning each coordinate to the last row or column.
    pub fn clamped(row: usize, col: usize) -> Self {
        let last = BOARD_SIZE - 1;
        Self {
            row: row.min(last) as u8,
            col: col.min(last) as u8,
        }
    }

    /// Row index (0 is Black's back rank).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Light cells are those where `(row + col)` is even.
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Cell { row, col }))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// 8x8 chess board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board in the standard opening layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (col, kind) in Kind::BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Square::Occupied(Piece::new(Side::Black, *kind));
            board.squares[1][col] = Square::Occupied(Piece::new(Side::Black, Kind::Pawn));
            board.squares[6][col] = Square::Occupied(Piece::new(Side::White, Kind::Pawn));
            board.squares[7][col] = Square::Occupied(Piece::new(Side::White, *kind));
        }
        board
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the contents of a cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.row()][cell.col()]
    }

    /// Overwrites a cell.
    pub fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.row()][cell.col()] = square;
    }

    /// Iterates over all occupied cells.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(|cell| self.get(cell).piece().map(|piece| (cell, piece)))
    }

    /// Formats the board as eight lines of letters, `.` for empty cells.
    pub fn display(&self) -> String {
        self.squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|square| square.piece().map_or('.', |p| p.letter()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
