//! Configuration management module
//!
//! Handles loading and validation of the game configuration: window
//! geometry, input tick rate, and where to find the question bank.

use crate::{QuizError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub mod bank;

pub use bank::QuestionBank;

/// Logical units covered by one terminal cell, horizontally and vertically
pub const CELL_WIDTH_UNITS: u16 = 8;
pub const CELL_HEIGHT_UNITS: u16 = 16;

/// Game window settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title drawn on the window frame
    pub title: String,
    /// Window width in logical units
    pub width: u16,
    /// Window height in logical units
    pub height: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Quiz Game".to_string(),
            width: 550,
            height: 350,
        }
    }
}

impl WindowConfig {
    /// Window size in terminal cells (columns, rows)
    pub fn cells(&self) -> (u16, u16) {
        (
            self.width.div_ceil(CELL_WIDTH_UNITS),
            self.height.div_ceil(CELL_HEIGHT_UNITS),
        )
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Window geometry and title
    pub window: WindowConfig,
    /// How long to wait for input before redrawing, in milliseconds
    pub tick_rate_ms: u64,
    /// Optional question bank file (TOML or JSON); the built-in set is used
    /// otherwise. A relative path is taken from the config file's directory.
    pub question_bank: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            tick_rate_ms: 250,
            question_bank: None,
        }
    }
}

impl QuizConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input poll timeout
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Set the question bank file
    pub fn with_question_bank(mut self, path: PathBuf) -> Self {
        self.question_bank = Some(path);
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.window.title.trim().is_empty() {
            return Err(QuizError::Config(
                "Window title must not be empty".to_string(),
            ));
        }

        // Smallest window that still fits a question and a couple of answers
        const MIN_WIDTH: u16 = 160;
        const MIN_HEIGHT: u16 = 128;
        if self.window.width < MIN_WIDTH || self.window.height < MIN_HEIGHT {
            return Err(QuizError::Config(format!(
                "Window too small: {}x{} (min: {}x{})",
                self.window.width, self.window.height, MIN_WIDTH, MIN_HEIGHT
            )));
        }

        if self.tick_rate_ms == 0 {
            return Err(QuizError::Config(
                "Tick rate must be greater than 0".to_string(),
            ));
        }

        const MAX_TICK_RATE_MS: u64 = 5_000;
        if self.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(QuizError::Config(format!(
                "Tick rate too long: {}ms (max: {}ms)",
                self.tick_rate_ms, MAX_TICK_RATE_MS
            )));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location.
    /// Returns the default configuration if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| {
            QuizError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        // Relative bank paths are relative to the config file
        if let Some(dir) = path.parent() {
            config.question_bank = config.question_bank.map(|bank| {
                if bank.is_relative() {
                    dir.join(bank)
                } else {
                    bank
                }
            });
        }
        debug!(path = %path.display(), "loaded config");

        Ok(config)
    }

    /// Get the standard configuration file path.
    /// Uses $CONFIG_HOME/quiz-game/quiz-game.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuizError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
