//! Strictly Chess - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_chess::{Board, ChessConfig, replay};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = ChessConfig::load(config.as_deref())?;
            strictly_chess::tui::run_tui(config)
        }
        Command::Clicks { json, clicks } => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                .with_writer(io::stderr)
                .init();

            let format = if json { replay::Format::Json } else { replay::Format::Text };
            replay::replay_clicks(&clicks, format, &mut io::stdout().lock())?;
            Ok(())
        }
        Command::Board => {
            println!("{}", Board::new().display());
            Ok(())
        }
    }
}
