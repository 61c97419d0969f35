//! Output format for log records
//!
//! - Text: human-readable line with an optional timestamp prefix
//! - Json: single-line JSON object with `time`, `level` and `message`

use super::error::Result;
use super::log_level::LogLevel;
use serde::Serialize;

/// Rendering mode selected per logging call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default)
    ///
    /// Example: `[10:30:45] INFO Request processed`
    #[default]
    Text,

    /// Single-line JSON
    ///
    /// Example: `{"time":"10:30:45","level":{"name":"info","priority":2,"scope":"OUT"},"message":"Request processed"}`
    Json,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

impl From<bool> for OutputFormat {
    /// `true` selects JSON
    fn from(as_json: bool) -> Self {
        if as_json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// The JSON record; field order is part of the wire shape
#[derive(Debug, Serialize)]
pub(crate) struct JsonRecord<'a> {
    pub time: &'a str,
    pub level: LogLevel,
    pub message: &'a str,
}

impl JsonRecord<'_> {
    pub(crate) fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Join the optional time prefix, the styled label and the message
pub(crate) fn join_text(time: Option<&str>, label: &str, message: &str) -> String {
    match time {
        Some(time) => format!("{} {} {}", time, label, message),
        None => format!("{} {}", label, message),
    }
}
