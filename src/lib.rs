//! Cliff Timer
//!
//! A terminal stopwatch that estimates the height of a drop from the
//! measured free-fall time, using h = ½·g·t².

use std::fmt;

pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod physics;
pub mod timer;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum CliffTimerError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Log sink could not be set up
    LoggingError(String),
}

impl fmt::Display for CliffTimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliffTimerError::IoError(err) => write!(f, "I/O error: {}", err),
            CliffTimerError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CliffTimerError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            CliffTimerError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for CliffTimerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliffTimerError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliffTimerError {
    fn from(err: std::io::Error) -> Self {
        CliffTimerError::IoError(err)
    }
}

impl From<toml::de::Error> for CliffTimerError {
    fn from(err: toml::de::Error) -> Self {
        CliffTimerError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CliffTimerError {
    fn from(err: toml::ser::Error) -> Self {
        CliffTimerError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for Cliff Timer operations
pub type Result<T> = std::result::Result<T, CliffTimerError>;

/// Error handling utilities
pub mod error {
    use super::CliffTimerError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &CliffTimerError) -> String {
        match error {
            CliffTimerError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check permissions on the config and data directories."
                    .to_string()
            }
            CliffTimerError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            CliffTimerError::TuiError(_) => {
                "The terminal could not be set up. Run cliff-timer from an interactive terminal."
                    .to_string()
            }
            CliffTimerError::LoggingError(msg) => {
                format!("Could not open the log file: {}. Set log_file in the settings.", msg)
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "cliff-timer";
pub const CONFIG_FILE: &str = "cliff-timer.toml";
pub const LOG_FILE: &str = "cliff-timer.log";
