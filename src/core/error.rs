//! Error types for the logger system

use super::log_level::Scope;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Writing a formatted line to an output stream failed
    #[error("Failed to write log line to {stream}: {source}")]
    Write {
        stream: Scope,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Time pattern the time formatter cannot render
    #[error("Invalid time format pattern: '{pattern}'")]
    TimeFormat { pattern: String },

    /// Level name that matches none of the known levels
    #[error("Unknown log level: '{0}'")]
    UnknownLevel(String),
}

impl LoggerError {
    /// Create a stream write error
    pub fn write(stream: Scope, source: std::io::Error) -> Self {
        LoggerError::Write { stream, source }
    }

    /// Create a time format error
    pub fn time_format(pattern: impl Into<String>) -> Self {
        LoggerError::TimeFormat {
            pattern: pattern.into(),
        }
    }
}
