//! Headless presentation surface: replays clicks and prints repaint instructions.

use crate::games::chess::{Notification, SelectionController};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::instrument;

/// Output format for replayed notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One human-readable line per notification.
    Text,
    /// One JSON object per line.
    Json,
}

/// Replays `clicks` against a fresh session, writing every notification
/// followed by the final board and side to move.
///
/// # Errors
///
/// Fails on the first click off the board, or when `out` cannot be written.
#[instrument(skip(out))]
pub fn replay_clicks<W: Write>(clicks: &[(i32, i32)], format: Format, out: &mut W) -> Result<SelectionController> {
    let mut controller = SelectionController::new();

    for (index, &(row, col)) in clicks.iter().enumerate() {
        let notifications = controller
            .on_cell_clicked(row, col)
            .with_context(|| format!("click #{} at {},{}", index + 1, row, col))?;
        for notification in &notifications {
            write_notification(notification, format, out)?;
        }
    }

    match format {
        Format::Text => {
            writeln!(out, "{}", controller.state().board().display())?;
            writeln!(out, "{} to move", controller.state().current_turn())?;
        }
        Format::Json => {
            let summary = serde_json::json!({
                "board": controller.state().board().display().lines().collect::<Vec<_>>(),
                "turn": controller.state().current_turn(),
                "selection": controller.selection(),
            });
            writeln!(out, "{}", summary)?;
        }
    }

    Ok(controller)
}

fn write_notification<W: Write>(notification: &Notification, format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string(notification)?)?,
        Format::Text => match notification {
            Notification::HighlightCell { cell } => writeln!(out, "highlight {}", cell)?,
            Notification::UnhighlightCell { cell } => writeln!(out, "unhighlight {}", cell)?,
            Notification::RedrawCell { cell, square } => match square.piece() {
                Some(piece) => writeln!(out, "redraw {} {}", cell, piece)?,
                None => writeln!(out, "redraw {} empty", cell)?,
            },
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::{BoardError, Side};

    #[test]
    fn test_text_replay() {
        let mut out = Vec::new();
        let controller = replay_clicks(&[(6, 0), (4, 0)], Format::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "highlight (6,0)");
        assert_eq!(lines[1], "unhighlight (6,0)");
        assert_eq!(lines[2], "redraw (6,0) empty");
        assert_eq!(lines[3], "redraw (4,0) White Pawn");
        assert_eq!(lines.last(), Some(&"Black to move"));
        assert_eq!(controller.state().current_turn(), Side::Black);
    }

    #[test]
    fn test_json_replay_lines_parse() {
        let mut out = Vec::new();
        replay_clicks(&[(6, 0)], Format::Json, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["type"], "HighlightCell");
        assert_eq!(first["cell"]["row"], 6);
    }

    #[test]
    fn test_replay_rejects_off_board_click() {
        let mut out = Vec::new();
        let err = replay_clicks(&[(6, 0), (-1, 0)], Format::Text, &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BoardError>(),
            Some(&BoardError::OutOfBounds { row: -1, col: 0 })
        );
    }
}
