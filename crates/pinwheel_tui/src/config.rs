//! Game configuration loaded from TOML.

use crate::animation::Timings;
use derive_getters::Getters;
use derive_more::{Display, Error};
use pinwheel_tictactoe::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// User-facing settings for the terminal game.
///
/// Every field has a default, so a partial (or missing) file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Difficulty preselected on the difficulty screen.
    default_difficulty: Difficulty,

    /// Seed for the AI's random choices. `None` draws from entropy.
    seed: Option<u64>,

    /// Event poll interval of the UI loop, in milliseconds.
    tick_rate_ms: u64,

    /// File that receives tracing output while the UI owns the terminal.
    log_file: PathBuf,

    /// Whether marks, the winning line and AI thinking are animated.
    animations: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::default(),
            seed: None,
            tick_rate_ms: 50,
            log_file: PathBuf::from("pinwheel.log"),
            animations: true,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be positive"));
        }

        info!(difficulty = %config.default_difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the preselected difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turns animations and AI pacing on or off.
    pub fn with_animations(mut self, animations: bool) -> Self {
        self.animations = animations;
        self
    }

    /// Poll interval as a duration.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Animation and pacing durations implied by [`Self::animations`].
    pub fn timings(&self) -> Timings {
        if self.animations {
            Timings::standard()
        } else {
            Timings::instant()
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
    /// Creates a new configuration error with caller location tracking.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("default_difficulty = \"hard\"").unwrap();
        assert_eq!(*config.default_difficulty(), Difficulty::Hard);
        assert_eq!(*config.tick_rate_ms(), 50);
        assert!(*config.animations());
        assert_eq!(config.seed(), &None);
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom");
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }

    #[test]
    fn test_timings_follow_animation_flag() {
        let config = GameConfig::default();
        assert_eq!(config.timings(), Timings::standard());
        assert_eq!(config.with_animations(false).timings(), Timings::instant());
    }
}
