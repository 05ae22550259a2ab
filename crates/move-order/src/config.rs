//! Tuning configuration for the ordering heuristics.
//!
//! The defaults reproduce the engine's built-in constants. A TOML file can
//! override any subset of them:
//!
//! ```toml
//! history_depth_cap = 12
//! history_decay_divisor = 64
//! history_age_divisor = 8
//! max_ply = 128
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value parsed but is outside its allowed range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Heuristic tuning shared by every orderer in a search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// Upper bound on the search depth used to size history updates.
    pub history_depth_cap: i32,
    /// Each update pulls an entry `depth / divisor` of the way toward zero.
    pub history_decay_divisor: i32,
    /// History entries are divided by this between searches.
    pub history_age_divisor: i32,
    /// Number of plies the killer table can hold.
    pub max_ply: usize,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            history_depth_cap: 12,
            history_decay_divisor: 64,
            history_age_divisor: 8,
            max_ply: 128,
        }
    }
}

impl OrderingConfig {
    /// Parses and validates a TOML document. Missing keys take their default.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that every value is strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("history_depth_cap", self.history_depth_cap > 0),
            ("history_decay_divisor", self.history_decay_divisor > 0),
            ("history_age_divisor", self.history_age_divisor > 0),
            ("max_ply", self.max_ply > 0),
        ];
        match checks.iter().find(|(_, ok)| !ok) {
            Some((name, _)) => Err(ConfigError::Invalid(format!("{} must be positive", name))),
            None => Ok(()),
        }
    }
}
