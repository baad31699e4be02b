//! Command-line interface for wallpaper tic-tac-toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wallpaper_tictactoe::{DisplayCoord, Mode};

/// Wallpaper Tic-Tac-Toe - one 3x3 board tiled nine ways
#[derive(Parser, Debug)]
#[command(name = "wallpaper_tictactoe")]
#[command(about = "Tic-tac-toe on a board tiled by planar symmetries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "wallpaper_tictactoe=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Symmetry mode (standard, torus, klein, projective); overrides the config file
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Path to the TOML config file (optional; defaults apply if missing)
        #[arg(short, long, default_value = "wallpaper_tictactoe.toml")]
        config: PathBuf,
    },

    /// Replay moves and print the resulting display grid
    Render {
        /// Symmetry mode
        #[arg(short, long, default_value = "standard")]
        mode: Mode,

        /// Display moves as "gx,gy" separated by ';', X first
        #[arg(long, value_delimiter = ';')]
        moves: Vec<DisplayCoord>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the symmetry modes and their folding rules
    Modes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_moves() {
        let cli = Cli::parse_from([
            "wallpaper_tictactoe",
            "render",
            "--mode",
            "klein",
            "--moves",
            "3,3;4,4;3,6",
        ]);
        match cli.command {
            Command::Render { mode, moves, json } => {
                assert_eq!(mode, Mode::Klein);
                assert_eq!(
                    moves,
                    vec![DisplayCoord::new(3, 3), DisplayCoord::new(4, 4), DisplayCoord::new(3, 6)]
                );
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::parse_from(["wallpaper_tictactoe", "--log-level", "debug", "play"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Play { mode, config } => {
                assert_eq!(mode, None);
                assert_eq!(config, PathBuf::from("wallpaper_tictactoe.toml"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_coordinate() {
        let result = Cli::try_parse_from(["wallpaper_tictactoe", "render", "--moves", "9,9"]);
        assert!(result.is_err());
    }
}
