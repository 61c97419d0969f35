//! In-memory appender that captures emitted lines

use crate::core::{Appender, Result, Scope};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures every appended line together with its stream
///
/// Clones share the same buffer, so a handle kept by the caller observes
/// lines written by a logger that owns another clone.
///
/// # Example
///
/// ```
/// use rust_console_logger::prelude::*;
///
/// let capture = MemoryAppender::new();
/// let logger = Logger::builder()
///     .level(LogLevel::Info)
///     .styler(PlainStyler)
///     .appender(capture.clone())
///     .build()
///     .unwrap();
///
/// logger.info("ready").unwrap();
/// assert_eq!(capture.lines(Scope::Out).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    records: Arc<Mutex<Vec<(Scope, String)>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in write order
    pub fn records(&self) -> Vec<(Scope, String)> {
        self.records.lock().clone()
    }

    /// Captured lines written to `scope`
    pub fn lines(&self, scope: Scope) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|(s, _)| *s == scope)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, scope: Scope, line: &str) -> Result<()> {
        self.records.lock().push((scope, line.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
