//! Timestamp formatting utilities
//!
//! Time patterns are chrono strftime strings. Rendering goes through
//! [`TimeSource`] so the logger can be driven by a fixed clock in tests.

use super::error::{LoggerError, Result};
use chrono::{DateTime, FixedOffset, Local};
use std::fmt::{self, Write};

/// Default pattern for the human-readable timestamp prefix
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Pattern used by JSON records, independent of the configured time format
pub const JSON_TIME_FORMAT: &str = "%H:%M:%S";

/// Source of the current wall-clock time, rendered per a strftime pattern
///
/// # Examples
///
/// ```
/// use rust_console_logger::core::{LocalTime, TimeSource};
///
/// let now = LocalTime.format_now("%H:%M").unwrap();
/// assert_eq!(now.len(), 5);
/// ```
pub trait TimeSource: Send + Sync {
    /// Render the current time using `pattern`
    ///
    /// Returns [`LoggerError::TimeFormat`] when the pattern cannot be rendered.
    fn format_now(&self, pattern: &str) -> Result<String>;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn format_now(&self, pattern: &str) -> Result<String> {
        render(Local::now().format(pattern), pattern)
    }
}

/// A clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub DateTime<FixedOffset>);

impl FixedTime {
    pub fn new(datetime: DateTime<FixedOffset>) -> Self {
        Self(datetime)
    }
}

impl TimeSource for FixedTime {
    fn format_now(&self, pattern: &str) -> Result<String> {
        render(self.0.format(pattern), pattern)
    }
}

// chrono reports bad specifiers as fmt::Error from Display; `to_string()`
// would panic on it.
fn render(formatted: impl fmt::Display, pattern: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).map_err(|_| LoggerError::time_format(pattern))?;
    Ok(out)
}
