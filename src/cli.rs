//! Command-line interface for strictly_chess.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Chess - two-player board without rule enforcement
#[derive(Parser, Debug)]
#[command(name = "strictly_chess")]
#[command(about = "Two-player chess board for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play on the interactive terminal board
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay clicks headlessly and print every repaint instruction
    Clicks {
        /// Print notifications as JSON lines
        #[arg(long)]
        json: bool,

        /// Clicks as ROW,COL pairs (0-7 each)
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_click)]
        clicks: Vec<(i32, i32)>,
    },

    /// Print the opening board
    Board,
}

/// Parses `ROW,COL` into raw coordinates.
///
/// Range is not checked here; the board reports out-of-range clicks.
pub fn parse_click(s: &str) -> Result<(i32, i32), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let row = row.trim().parse::<i32>().map_err(|e| format!("bad row '{}': {}", row, e))?;
    let col = col.trim().parse::<i32>().map_err(|e| format!("bad column '{}': {}", col, e))?;
    Ok((row, col))
}
