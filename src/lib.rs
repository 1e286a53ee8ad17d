//! Quiz Game
//!
//! A terminal quiz game: a title screen and a question screen wired together
//! through a publish/subscribe event bus, with a controller owning the
//! game progression.

use thiserror::Error;

pub mod app;
pub mod config;
pub mod events;
pub mod game;
pub mod models;

// Common error types
#[derive(Debug, Error)]
pub enum QuizError {
    /// A record failed validation on construction
    #[error("Validation error: {0}")]
    Validation(String),
    /// Configuration or question bank loading error
    #[error("Configuration error: {0}")]
    Config(String),
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    Tui(String),
    /// An event arrived that the current game progression cannot accept
    #[error("Progression error: {0}")]
    Progression(String),
    /// The view stopped receiving commands
    #[error("View is no longer receiving commands")]
    ViewDisconnected,
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Config(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for QuizError {
    fn from(err: toml::de::Error) -> Self {
        QuizError::Config(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Error handling utilities
pub mod error {
    use super::QuizError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &QuizError) -> String {
        match error {
            QuizError::Config(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            QuizError::Validation(msg) => {
                format!("Invalid quiz data: {}. Check the question bank.", msg)
            }
            QuizError::Tui(_) => {
                "The terminal could not be drawn. Try a larger terminal window.".to_string()
            }
            QuizError::ViewDisconnected => {
                "The game screen stopped responding.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "quiz-game";
pub const CONFIG_FILE: &str = "quiz-game.toml";
pub const LOG_FILE: &str = "quiz-game.log";
pub const LOG_ENV: &str = "QUIZ_LOG";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_message() {
        let msg = error::user_friendly_message(&QuizError::Validation("empty text".into()));
        assert!(msg.contains("empty text"));
        assert!(msg.contains("question bank"));

        let msg = error::user_friendly_message(&QuizError::Progression("x".into()));
        assert_eq!(msg, "Progression error: x");
    }

    #[test]
    fn test_toml_error_maps_to_config() {
        let err: QuizError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, QuizError::Config(_)));
    }
}
