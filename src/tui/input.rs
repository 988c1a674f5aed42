//! Cursor movement and mouse hit-testing.

use crate::games::chess::{BOARD_SIZE, Cell};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;

/// Terminal columns per board cell.
pub const CELL_WIDTH: u16 = 5;
/// Terminal rows per board cell.
pub const CELL_HEIGHT: u16 = 1;

/// Moves cursor based on arrow keys or hjkl, stopping at the edges.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());
    match key {
        KeyCode::Up | KeyCode::Char('k') => Cell::clamped(row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => Cell::clamped(row + 1, col),
        KeyCode::Left | KeyCode::Char('h') => Cell::clamped(row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Cell::clamped(row, col + 1),
        _ => cursor,
    }
}

/// Maps a terminal position to the board cell drawn there.
///
/// `grid` is the area holding the 8x8 cells, without labels.
pub fn cell_at(grid: Rect, column: u16, row: u16) -> Option<Cell> {
    if column < grid.x || row < grid.y {
        return None;
    }
    let col = ((column - grid.x) / CELL_WIDTH) as usize;
    let row = ((row - grid.y) / CELL_HEIGHT) as usize;
    if col < BOARD_SIZE && row < BOARD_SIZE {
        Some(Cell::clamped(row, col))
    } else {
        None
    }
}
