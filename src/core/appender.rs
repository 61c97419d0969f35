//! Appender trait for log output destinations

use super::{error::Result, log_level::Scope};

/// Line-oriented output sink with one stream per [`Scope`]
pub trait Appender: Send {
    /// Write one formatted line to the stream for `scope`
    fn append(&mut self, scope: Scope, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
