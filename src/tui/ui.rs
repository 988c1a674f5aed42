//! Stateless UI rendering for the chess board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use super::input::{CELL_HEIGHT, CELL_WIDTH};
use crate::config::ChessConfig;
use crate::games::chess::{BOARD_SIZE, Cell, Side, Square};

/// Glyphs indexed by `[side][kind]`, kinds in declaration order
/// (Pawn, Rook, Knight, Bishop, Queen, King).
const GLYPHS: [[&str; 6]; 2] = [
    ["♙", "♖", "♘", "♗", "♕", "♔"],
    ["♟", "♜", "♞", "♝", "♛", "♚"],
];

const LIGHT: Color = Color::Rgb(240, 240, 240);
const DARK: Color = Color::Rgb(128, 128, 128);
const SELECTED: Color = Color::Yellow;
const CURSOR: Color = Color::LightBlue;

/// Width of the row labels column.
const LABEL_WIDTH: u16 = 2;

/// Symbol drawn for a cell's contents; blank when empty.
pub fn glyph(square: Square) -> &'static str {
    match square {
        Square::Empty => " ",
        Square::Occupied(piece) => GLYPHS[piece.side as usize][piece.kind as usize],
    }
}

/// Checkerboard shade of a cell, a pure function of `(row + col) % 2`.
pub fn base_color(cell: Cell) -> Color {
    if cell.is_light() { LIGHT } else { DARK }
}

/// Renders the whole screen and returns the area holding the 8x8 cells.
pub fn draw(frame: &mut Frame, app: &App, config: &ChessConfig) -> Rect {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(config.title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let grid = draw_board(frame, chunks[1], app, *config.show_coordinates());

    let turn = app.controller().state().current_turn();
    let turn_color = match turn {
        Side::White => Color::White,
        Side::Black => Color::DarkGray,
    };
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", turn))
                .border_style(Style::default().fg(turn_color)),
        );
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows/hjkl move · enter/space/click select · esc cancel · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    grid
}

/// Computes where the cells go inside `area`.
pub fn grid_rect(area: Rect, show_coordinates: bool) -> Rect {
    let label_w = if show_coordinates { LABEL_WIDTH } else { 0 };
    let label_h = if show_coordinates { 1 } else { 0 };
    let grid_w = CELL_WIDTH * BOARD_SIZE as u16;
    let grid_h = CELL_HEIGHT * BOARD_SIZE as u16;

    let outer = center_rect(area, grid_w + label_w, grid_h + label_h);
    Rect::new(
        outer.x + label_w,
        outer.y,
        grid_w.min(outer.width.saturating_sub(label_w)),
        grid_h.min(outer.height),
    )
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, show_coordinates: bool) -> Rect {
    let grid = grid_rect(area, show_coordinates);
    let board = app.controller().state().board();

    for cell in Cell::all() {
        let rect = cell_rect(grid, cell);
        if rect.width == 0 || rect.height == 0 {
            continue;
        }

        let mut style = Style::default().fg(Color::Black);
        style = if app.highlighted() == Some(cell) {
            style.bg(SELECTED)
        } else if app.cursor() == cell {
            style.bg(CURSOR)
        } else {
            style.bg(base_color(cell))
        };
        if app.cursor() == cell {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }

        let paragraph = Paragraph::new(glyph(board.get(cell)))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, rect);
    }

    if show_coordinates {
        draw_labels(frame, grid);
    }

    grid
}

fn draw_labels(frame: &mut Frame, grid: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    for i in 0..BOARD_SIZE as u16 {
        let y = grid.y + i * CELL_HEIGHT;
        if grid.x >= LABEL_WIDTH && y < grid.bottom() {
            let row_label = Rect::new(grid.x - LABEL_WIDTH, y, 1, 1);
            frame.render_widget(Paragraph::new(i.to_string()).style(style), row_label);
        }

        let x = grid.x + i * CELL_WIDTH;
        if x < grid.right() {
            let col_label = Rect::new(x, grid.bottom(), CELL_WIDTH, 1).intersection(frame.area());
            frame.render_widget(
                Paragraph::new(i.to_string()).style(style).alignment(Alignment::Center),
                col_label,
            );
        }
    }
}

fn cell_rect(grid: Rect, cell: Cell) -> Rect {
    let rect = Rect::new(
        grid.x + cell.col() as u16 * CELL_WIDTH,
        grid.y + cell.row() as u16 * CELL_HEIGHT,
        CELL_WIDTH,
        CELL_HEIGHT,
    );
    rect.intersection(grid)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
