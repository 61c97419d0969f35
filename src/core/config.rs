//! Logger configuration
//!
//! The active level is read from a single configuration value, by default the
//! `LOG_LEVEL` environment variable. [`ConfigSource`] abstracts where that
//! value comes from.

use super::log_level::{LogLevel, DEFAULT_LEVEL};
use super::timestamp::DEFAULT_TIME_FORMAT;
use std::collections::HashMap;

/// Default name of the variable holding the level threshold
pub const DEFAULT_LEVEL_VAR: &str = "LOG_LEVEL";

/// Provides configuration values by key
pub trait ConfigSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Resolve the threshold level from a raw configuration value
///
/// Absent or empty values yield the default level. Integer values are looked
/// up by priority; anything else is looked up by name. Unknown priorities and
/// names also fall back to the default level.
///
/// # Examples
///
/// ```
/// use rust_console_logger::core::{resolve_level, LogLevel};
///
/// assert_eq!(resolve_level(None), LogLevel::Info);
/// assert_eq!(resolve_level(Some("1")), LogLevel::Warn);
/// assert_eq!(resolve_level(Some("debug")), LogLevel::Debug);
/// assert_eq!(resolve_level(Some("99")), LogLevel::Info);
/// ```
pub fn resolve_level(value: Option<&str>) -> LogLevel {
    match value {
        None | Some("") => DEFAULT_LEVEL,
        Some(raw) => match raw.parse::<i64>() {
            Ok(priority) => LogLevel::from_priority(priority).unwrap_or(DEFAULT_LEVEL),
            Err(_) => LogLevel::from_name(raw).unwrap_or(DEFAULT_LEVEL),
        },
    }
}

/// Construction-time settings for a [`Logger`](super::Logger)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Name of the variable holding the level threshold
    pub level_var: String,
    /// Initial strftime pattern for the human-readable timestamp
    pub time_format: String,
    /// Whether the default styler emits ANSI colors
    pub use_colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level_var: DEFAULT_LEVEL_VAR.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            use_colors: true,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level_var(mut self, name: impl Into<String>) -> Self {
        self.level_var = name.into();
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.time_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Resolve the threshold level from `source`
    pub fn resolve_level(&self, source: &dyn ConfigSource) -> LogLevel {
        resolve_level(source.var(&self.level_var).as_deref())
    }
}
