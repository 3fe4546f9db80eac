//! Bench configuration, loaded from an optional TOML file.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use gridsearch::SearchConfig;
use serde::Deserialize;

/// Side of the default square grid.
pub const DEFAULT_GRID_SIZE: i32 = 25;

/// Rounds per session when none is configured.
pub const DEFAULT_ROUNDS: usize = 10;

/// Extra attempts after a failed search before the session gives up.
pub const DEFAULT_RETRIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub rows: i32,
    pub cols: i32,
    /// Targets the agent is sent to, one per round.
    pub rounds: usize,
    pub retries: usize,
    /// Seed for the layout. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub search: SearchConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIZE,
            cols: DEFAULT_GRID_SIZE,
            rounds: DEFAULT_ROUNDS,
            retries: DEFAULT_RETRIES,
            seed: None,
            search: SearchConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Read and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the grid can hold an agent and a distinct target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 1 || self.cols < 1 || i64::from(self.rows) * i64::from(self.cols) < 2 {
            return Err(ConfigError::Invalid(format!(
                "grid must hold at least two cells, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config: {e}"),
            Self::Toml(e) => write!(f, "config: {e}"),
            Self::Invalid(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
