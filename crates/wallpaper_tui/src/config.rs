//! Terminal client configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use wallpaper_tictactoe::Mode;

/// Settings for the terminal client, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Mode for the first game.
    #[serde(default)]
    default_mode: Mode,

    /// File receiving log output while the terminal is in raw mode.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Draw inactive cells with a shade instead of leaving them blank.
    #[serde(default = "default_show_inactive")]
    show_inactive: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("wallpaper_tictactoe.log")
}

fn default_show_inactive() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            log_file: default_log_file(),
            show_inactive: default_show_inactive(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.default_mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with the starting mode replaced.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.default_mode = mode;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, TuiConfig::default());
        assert_eq!(*config.default_mode(), Mode::Standard);
        assert!(*config.show_inactive());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_mode = \"projective\"\n").expect("Write failed");

        let config = TuiConfig::load_or_default(&path).expect("valid config");
        assert_eq!(*config.default_mode(), Mode::Projective);
        assert_eq!(config.log_file(), &PathBuf::from("wallpaper_tictactoe.log"));
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "default_mode = \"klein\"\nlog_file = \"/tmp/wt.log\"\nshow_inactive = false\n",
        )
        .expect("Write failed");

        let config = TuiConfig::from_file(&path).expect("valid config");
        assert_eq!(*config.default_mode(), Mode::Klein);
        assert!(!*config.show_inactive());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("bad.toml");
        fs::write(&path, "default_mode = \"sphere\"").expect("Write failed");

        let err = TuiConfig::load_or_default(&path).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_with_mode_overrides() {
        let config = TuiConfig::default().with_mode(Mode::Torus);
        assert_eq!(*config.default_mode(), Mode::Torus);
    }
}
