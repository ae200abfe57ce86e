//! Logging setup
//!
//! The terminal belongs to the TUI, so log output goes to a file.
//! `RUST_LOG` overrides the configured level.

use crate::config::AppConfig;
use crate::{CliffTimerError, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, or from the configured level
pub fn build_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cliff_timer={}", config.log_level)))
}

/// Install the global subscriber writing to the configured log file.
/// Returns the path being written to.
pub fn init(config: &AppConfig) -> Result<PathBuf> {
    let path = config.log_file_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CliffTimerError::LoggingError(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            CliffTimerError::LoggingError(format!("Failed to open {}: {}", path.display(), e))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| CliffTimerError::LoggingError(e.to_string()))?;

    Ok(path)
}

/// Like [`init`], but a log file that cannot be opened only costs the log.
/// A warning goes to stderr (the TUI has not taken the terminal yet) and
/// no subscriber is installed, so events are discarded.
pub fn init_or_warn(config: &AppConfig) -> Option<PathBuf> {
    match init(config) {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("Warning: {}. Continuing without a log file.", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unopenable_log_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let config = AppConfig::new().with_log_file(temp_dir.path().to_path_buf());
        assert!(matches!(init(&config), Err(CliffTimerError::LoggingError(_))));
    }

    #[test]
    fn test_unopenable_log_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::new().with_log_file(temp_dir.path().to_path_buf());
        assert!(init_or_warn(&config).is_none());
    }

    #[test]
    fn test_filter_uses_configured_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = AppConfig::new().with_log_level("debug");
        let filter = build_filter(&config);
        assert_eq!(filter.to_string(), "cliff_timer=debug");
    }
}
