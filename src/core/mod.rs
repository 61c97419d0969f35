//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod output_format;
pub mod styler;
pub mod timestamp;

pub use appender::Appender;
pub use config::{resolve_level, ConfigSource, EnvSource, LoggerConfig, DEFAULT_LEVEL_VAR};
pub use error::{LoggerError, Result};
pub use log_level::{LogLevel, Scope, DEFAULT_LEVEL};
pub use logger::{LogOutcome, Logger, LoggerBuilder};
pub use output_format::OutputFormat;
#[cfg(feature = "console")]
pub use styler::ColoredStyler;
pub use styler::{PlainStyler, Styler};
pub use timestamp::{FixedTime, LocalTime, TimeSource, DEFAULT_TIME_FORMAT, JSON_TIME_FORMAT};
