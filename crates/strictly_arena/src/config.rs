//! Arena configuration loaded from TOML.

use crate::mode::{Difficulty, GameMode};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_minimax::Player as Mark;
use tracing::{debug, info, instrument};

/// Settings for a game session.
///
/// Every field has a default, so a partial file (or none at all) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct ArenaConfig {
    /// Who plays on each side.
    mode: GameMode,

    /// Mark played by the computer in human-vs-computer mode.
    computer_mark: Mark,

    /// Mark that moves first.
    first_player: Mark,

    /// Strength of computer players.
    difficulty: Difficulty,

    /// Pause before each computer move, in milliseconds.
    think_delay_ms: u64,

    /// Display name for human players.
    #[setters(into)]
    human_name: String,

    /// Display name for computer players.
    #[setters(into)]
    computer_name: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer_mark: Mark::O,
            first_player: Mark::X,
            difficulty: Difficulty::default(),
            think_delay_ms: 500,
            human_name: "Human".to_string(),
            computer_name: "Computer".to_string(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Pause before each computer move.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
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
