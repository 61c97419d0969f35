//! # Rust Console Logger
//!
//! A small console logger that filters records by severity and writes them
//! either as colored human-readable lines or as single-line JSON.
//!
//! ## Features
//!
//! - **Four fixed levels**: `error` and `warn` go to stderr, `info` and
//!   `debug` go to stdout
//! - **Configurable threshold**: resolved from `LOG_LEVEL` by name or priority
//! - **Two formats**: `[time] LEVEL message` or `{"time","level","message"}`
//! - **Injectable collaborators**: styler, time source and output appender
//!
//! ```
//! use rust_console_logger::prelude::*;
//!
//! let capture = MemoryAppender::new();
//! let logger = Logger::builder()
//!     .level(LogLevel::Info)
//!     .appender(capture.clone())
//!     .build()?;
//!
//! assert!(logger.debug("dropped")?.is_none());
//! assert!(logger.info("ready")?.is_some());
//! assert_eq!(capture.lines(Scope::Out).len(), 1);
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    #[cfg(feature = "console")]
    pub use crate::core::ColoredStyler;
    pub use crate::core::{
        Appender, ConfigSource, EnvSource, FixedTime, LocalTime, LogLevel, LogOutcome, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, OutputFormat, PlainStyler, Result, Scope,
        Styler, TimeSource, DEFAULT_LEVEL,
    };
}

pub use appenders::{ConsoleAppender, MemoryAppender};
#[cfg(feature = "console")]
pub use crate::core::ColoredStyler;
pub use crate::core::{
    resolve_level, Appender, ConfigSource, EnvSource, FixedTime, LocalTime, LogLevel, LogOutcome,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, OutputFormat, PlainStyler, Result, Scope,
    Styler, TimeSource, DEFAULT_LEVEL, DEFAULT_LEVEL_VAR, DEFAULT_TIME_FORMAT, JSON_TIME_FORMAT,
};
