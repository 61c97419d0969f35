//! Console appender implementation

use crate::core::{Appender, LoggerError, Result, Scope};
use std::io::{self, Write};

/// Writes lines to the process's standard output and standard error
///
/// Write failures are returned to the caller rather than panicking the way
/// `println!` does on a closed stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, scope: Scope, line: &str) -> Result<()> {
        let written = match scope {
            Scope::Out => writeln!(io::stdout().lock(), "{}", line),
            Scope::Err => writeln!(io::stderr().lock(), "{}", line),
        };
        written.map_err(|e| LoggerError::write(scope, e))
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
