//! Wallpaper Tic-Tac-Toe - Unified CLI
//!
//! Play in the terminal, or replay moves and print the tiled display.

#![warn(missing_docs)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use wallpaper_tictactoe::{
    CenterBoard, DisplayCoord, GameState, GameStatus, MacroOffset, Mode, VisualGrid, transform_for,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = cli.log_level.as_deref();

    match cli.command {
        Command::Play { mode, config } => run_play(&config, mode, log_level),
        Command::Render { mode, moves, json } => {
            init_stderr_logging(log_level);
            run_render(mode, &moves, json)
        }
        Command::Modes => {
            init_stderr_logging(log_level);
            run_modes();
            Ok(())
        }
    }
}

/// Logging for the non-interactive commands goes to stderr.
fn init_stderr_logging(log_level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("warn"))),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive terminal game.
fn run_play(config_path: &Path, mode: Option<Mode>, log_level: Option<&str>) -> Result<()> {
    let config = TuiConfig::load_or_default(config_path)?;
    let config = match mode {
        Some(mode) => config.with_mode(mode),
        None => config,
    };
    tui::run_tui(&config, log_level)
}

/// Everything `render --json` reports about a replayed game.
#[derive(Debug, Serialize)]
struct RenderReport {
    mode: Mode,
    board: CenterBoard,
    grid: VisualGrid,
    status: GameStatus,
    winning_line: Option<[DisplayCoord; 3]>,
}

impl From<&GameState> for RenderReport {
    fn from(game: &GameState) -> Self {
        Self {
            mode: *game.mode(),
            board: *game.board(),
            grid: game.grid(),
            status: *game.status(),
            winning_line: game.winning_line(),
        }
    }
}

/// Replay moves and print the resulting display.
#[instrument(skip(moves), fields(move_count = moves.len()))]
fn run_render(mode: Mode, moves: &[DisplayCoord], json: bool) -> Result<()> {
    let game = GameState::replay(mode, moves)
        .with_context(|| format!("Failed to replay moves under {}", mode.label()))?;
    info!(status = ?game.status(), "Replay finished");

    if json {
        let report = RenderReport::from(&game);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", mode.label());
        println!();
        println!("{}", game.grid().display());
        println!();
        println!("{}", game.status_message());
        if let Some(line) = game.winning_line() {
            let cells = line.map(|display| display.to_string()).join(" ");
            println!("Winning line: {}", cells);
        }
    }
    Ok(())
}

/// Print each mode with the folding rule of every sub-board.
fn run_modes() {
    for (index, mode) in Mode::ALL.into_iter().enumerate() {
        println!("{}. {} ({})", index + 1, mode.label(), mode);
        for dy in -1..=1 {
            let row = (-1..=1)
                .map(|dx| {
                    let rule = transform_for(mode, MacroOffset::new(dx, dy))
                        .map(|rule| format!("{:?}", rule))
                        .unwrap_or_else(|| "-".to_string());
                    format!("{:<9}", rule)
                })
                .collect::<Vec<_>>()
                .join(" ");
            println!("   {}", row.trim_end());
        }
        println!();
    }
}
