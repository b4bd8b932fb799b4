//! Configuration module for GradePoint.
//!
//! This module handles parsing configuration from environment variables.
//! Everything here is ambient tuning for the TUI; the calculator itself
//! takes no configuration.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `GRADEPOINT_TICK_RATE_MS` | No | 60 | Event loop tick interval in milliseconds |
//! | `GRADEPOINT_LOG_FILE` | No | (disabled) | Append tracing output to this file |
//!
//! `NO_COLOR` is honored separately by the theme; see the `tui` module.
//!
//! # Example
//!
//! ```
//! use gradepoint_tui::config::Config;
//!
//! let config = Config::from_env().expect("Failed to load configuration");
//! assert!(config.tick_rate_ms > 0);
//! ```

use std::env;
use std::path::PathBuf;

use directories::BaseDirs;
use thiserror::Error;

/// Default event loop tick interval in milliseconds (~16 FPS).
pub const DEFAULT_TICK_RATE_MS: u64 = 60;

/// Default directory name relative to home for log output.
const DEFAULT_APP_DIR: &str = ".gradepoint";

/// Default log file name within the app directory.
const DEFAULT_LOG_FILE: &str = "gradepoint.log";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to determine home directory.
    #[error("failed to determine home directory")]
    NoHomeDirectory,
}

/// Configuration for the GradePoint TUI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Event loop tick interval in milliseconds. Must be positive.
    pub tick_rate_ms: u64,

    /// Path to append tracing output to. `None` disables logging entirely,
    /// which is the default: a TUI owns the terminal, so log output goes to
    /// a file or nowhere.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_file: None,
        }
    }
}

impl Config {
    /// Creates a new `Config` by parsing environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `GRADEPOINT_TICK_RATE_MS` is set but is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let tick_rate_ms = match env::var("GRADEPOINT_TICK_RATE_MS") {
            Ok(raw) => parse_tick_rate(&raw)?,
            Err(_) => DEFAULT_TICK_RATE_MS,
        };

        let log_file = env::var("GRADEPOINT_LOG_FILE").ok().map(PathBuf::from);

        Ok(Self {
            tick_rate_ms,
            log_file,
        })
    }

    /// Returns the default log path, `~/.gradepoint/gradepoint.log`.
    ///
    /// Used when logging is enabled without an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] if the home directory
    /// cannot be determined.
    pub fn default_log_path() -> Result<PathBuf, ConfigError> {
        let base_dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(base_dirs
            .home_dir()
            .join(DEFAULT_APP_DIR)
            .join(DEFAULT_LOG_FILE))
    }
}

fn parse_tick_rate(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            key: "GRADEPOINT_TICK_RATE_MS".to_string(),
            message: "expected positive integer".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("GRADEPOINT_TICK_RATE_MS");
        env::remove_var("GRADEPOINT_LOG_FILE");
    }

    #[test]
    #[serial]
    fn from_env_uses_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial]
    fn from_env_parses_tick_rate() {
        clear_env();
        env::set_var("GRADEPOINT_TICK_RATE_MS", "33");
        let config = Config::from_env().unwrap();
        assert_eq!(config.tick_rate_ms, 33);
        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_rejects_zero_tick_rate() {
        clear_env();
        env::set_var("GRADEPOINT_TICK_RATE_MS", "0");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_rejects_garbage_tick_rate() {
        clear_env();
        env::set_var("GRADEPOINT_TICK_RATE_MS", "fast");
        let err = Config::from_env().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for GRADEPOINT_TICK_RATE_MS: expected positive integer"
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_reads_log_file() {
        clear_env();
        env::set_var("GRADEPOINT_LOG_FILE", "/tmp/gp.log");
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/gp.log")));
        clear_env();
    }

    #[test]
    fn default_log_path_is_under_home() {
        let path = Config::default_log_path().unwrap();
        assert!(path.ends_with(".gradepoint/gradepoint.log"));
    }

    #[test]
    fn default_config_matches_env_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(config.log_file.is_none());
    }
}
