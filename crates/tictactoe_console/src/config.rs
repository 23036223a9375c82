//! Console settings, optionally loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe::{ErrorLocation, Mark};
use tracing::{debug, info, instrument};

/// Presentation and start-up settings for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Symbol drawn for an empty cell.
    #[serde(default = "default_placeholder")]
    placeholder: char,

    /// Mark that moves first.
    #[serde(default = "default_first_player")]
    first_player: Mark,
}

#[instrument]
fn default_placeholder() -> char {
    '_'
}

#[instrument]
fn default_first_player() -> Mark {
    Mark::X
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            first_player: default_first_player(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.placeholder.is_whitespace() {
            return Err(ConfigError::new("Placeholder must be visible"));
        }
        Ok(config)
    }

    /// Replaces the first mover.
    pub fn with_first_player(mut self, mark: Mark) -> Self {
        self.first_player = mark;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}", message, location)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Where the error was raised.
    pub location: ErrorLocation,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }
}
