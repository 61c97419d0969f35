//! Log level definitions
//!
//! The four severity levels form a closed set. Each level carries a fixed
//! name, a numeric priority (0 is the most urgent) and the output stream its
//! records are written to.

use super::error::LoggerError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Output stream a level's records are written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    /// Standard output
    Out,
    /// Standard error
    Err,
}

impl Scope {
    pub fn to_str(&self) -> &'static str {
        match self {
            Scope::Out => "stdout",
            Scope::Err => "stderr",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Severity level, ordered by ascending priority (descending urgency)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    #[default]
    Info = 2,
    Debug = 3,
}

/// Level used when configuration is absent or cannot be resolved
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

impl LogLevel {
    /// Every level, in ascending priority order
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    /// Uppercase display label used by the human-readable formatter
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    #[inline]
    pub fn priority(&self) -> u8 {
        *self as u8
    }

    pub fn scope(&self) -> Scope {
        match self {
            LogLevel::Error | LogLevel::Warn => Scope::Err,
            LogLevel::Info | LogLevel::Debug => Scope::Out,
        }
    }

    #[cfg(feature = "console")]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Error => Red,
            LogLevel::Warn => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
        }
    }

    /// Look up a level by exact, case-sensitive name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.name() == name)
    }

    /// Look up a level by exact priority value
    pub fn from_priority(priority: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| i64::from(level.priority()) == priority)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LoggerError::UnknownLevel(s.to_string()))
    }
}

/// Serializes the level descriptor: `{"name":..,"priority":..,"scope":..}`
impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("LogLevel", 3)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("priority", &self.priority())?;
        state.serialize_field("scope", &self.scope())?;
        state.end()
    }
}
