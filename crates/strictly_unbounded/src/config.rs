//! Engine configuration.

use super::state::{DEFAULT_WIN_LENGTH, GameState};
use super::types::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a new game.
///
/// ```toml
/// win_length = 5
/// opening_player = "Second"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Exact run length required to win.
    #[serde(default = "default_win_length")]
    win_length: usize,

    /// Player whose mark the first reduced move places.
    #[serde(default = "default_opening_player")]
    opening_player: Player,
}

fn default_win_length() -> usize {
    DEFAULT_WIN_LENGTH
}

fn default_opening_player() -> Player {
    Player::Second
}

impl EngineConfig {
    /// Creates a configuration with the given win-length and the default
    /// opening player.
    #[instrument]
    pub fn new(win_length: usize) -> Result<Self, ConfigError> {
        let config = Self {
            win_length,
            opening_player: default_opening_player(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different opening player.
    pub fn with_opening_player(self, opening_player: Player) -> Self {
        Self {
            opening_player,
            ..self
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(win_length = config.win_length, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no game could be won under.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_length == 0 {
            return Err(ConfigError::new("win_length must be at least 1"));
        }
        Ok(())
    }

    /// Creates a fresh game with these settings.
    #[instrument(skip(self))]
    pub fn new_game(&self) -> GameState {
        GameState::with_opening_player(self.win_length, self.opening_player)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            win_length: default_win_length(),
            opening_player: default_opening_player(),
        }
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
