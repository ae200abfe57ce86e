//! Configuration management module
//!
//! Handles loading, saving, and validation of the user's settings file.
//! Only presentation concerns are configurable; gravity and the default
//! height unit are fixed.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::fs;
use serde::{Deserialize, Serialize};
use crate::{CliffTimerError, Result, APP_NAME, CONFIG_FILE, LOG_FILE};

/// Accepted values for `log_level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const MIN_INTERVAL: Duration = Duration::from_millis(1);
const MAX_INTERVAL: Duration = Duration::from_secs(1);

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay between live refreshes of the time readout
    #[serde(with = "humantime_duration")]
    pub refresh_interval: Duration,
    /// Longest the UI loop waits for input before redrawing
    #[serde(with = "humantime_duration")]
    pub input_poll_interval: Duration,
    /// Minimum level written to the log file
    pub log_level: String,
    /// Log file location, defaults to the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(16), // ~60 FPS
            input_poll_interval: Duration::from_millis(50),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        Self::validate_interval("refresh_interval", self.refresh_interval)?;
        Self::validate_interval("input_poll_interval", self.input_poll_interval)?;

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CliffTimerError::ConfigError(
                format!("Unknown log level '{}' (expected one of: {})",
                    self.log_level, LOG_LEVELS.join(", "))
            ));
        }

        if let Some(path) = &self.log_file {
            if path.as_os_str().is_empty() {
                return Err(CliffTimerError::ConfigError(
                    "Log file path must not be empty".to_string()
                ));
            }
        }

        Ok(())
    }

    fn validate_interval(name: &str, interval: Duration) -> Result<()> {
        if interval < MIN_INTERVAL || interval > MAX_INTERVAL {
            return Err(CliffTimerError::ConfigError(
                format!("{} must be between {} and {} (got {})",
                    name,
                    humantime::format_duration(MIN_INTERVAL),
                    humantime::format_duration(MAX_INTERVAL),
                    humantime::format_duration(interval))
            ));
        }
        Ok(())
    }

    /// Set the refresh interval
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Set the input poll interval
    pub fn with_input_poll_interval(mut self, interval: Duration) -> Self {
        self.input_poll_interval = interval;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the log file path
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliffTimerError::ConfigError(
                format!("Failed to read config file {}: {}", path.display(), e)
            ))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| CliffTimerError::ConfigError(
                format!("Failed to parse config file {}: {}", path.display(), e)
            ))?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CliffTimerError::ConfigError(
                    format!("Failed to create config directory {}: {}", parent.display(), e)
                ))?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content)
            .map_err(|e| CliffTimerError::ConfigError(
                format!("Failed to write config file {}: {}", path.display(), e)
            ))?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/cliff-timer/cliff-timer.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliffTimerError::ConfigError(
                "Unable to determine config directory".to_string()
            ))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolve where the log file goes
    /// Uses `log_file` if set, otherwise $DATA_HOME/cliff-timer/cliff-timer.log
    pub fn log_file_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| CliffTimerError::ConfigError(
                "Unable to determine data directory".to_string()
            ))?;

        Ok(data_dir.join(APP_NAME).join(LOG_FILE))
    }
}

// Durations are written the way people type them: "16ms", "1s"
mod humantime_duration {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        humantime::parse_duration(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.refresh_interval, Duration::from_millis(16));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_toml_serialization() {
        let config = AppConfig::new()
            .with_refresh_interval(Duration::from_millis(33))
            .with_log_level("debug");
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        assert!(toml_str.contains("refresh_interval = \"33ms\""));

        let deserialized: AppConfig = toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("log_level = \"warn\"\n").unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.refresh_interval, Duration::from_millis(16));
        assert_eq!(config.input_poll_interval, Duration::from_millis(50));
    }

    #[test]
    fn test_bad_duration_rejected() {
        let parsed: std::result::Result<AppConfig, _> = toml::from_str("refresh_interval = \"soon\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_interval() {
        let config = AppConfig::new().with_refresh_interval(Duration::ZERO);
        assert!(matches!(config.validate(), Err(CliffTimerError::ConfigError(_))));

        let config = AppConfig::new().with_input_poll_interval(Duration::from_secs(5));
        assert!(matches!(config.validate(), Err(CliffTimerError::ConfigError(_))));
    }

    #[test]
    fn test_validation_rejects_unknown_log_level() {
        let config = AppConfig::new().with_log_level("chatty");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        let config = AppConfig::new()
            .with_input_poll_interval(Duration::from_millis(100))
            .with_log_file(temp_dir.path().join("timer.log"));
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = AppConfig::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "log_level = \"loud\"\n").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("cliff-timer"));
        assert!(path.to_string_lossy().ends_with("cliff-timer.toml"));
    }

    #[test]
    fn test_log_file_override() {
        let config = AppConfig::new().with_log_file(PathBuf::from("/tmp/custom.log"));
        assert_eq!(config.log_file_path().unwrap(), PathBuf::from("/tmp/custom.log"));
    }
}
