//! Main logger implementation

use super::{
    appender::Appender,
    config::{ConfigSource, EnvSource, LoggerConfig},
    error::Result,
    log_level::LogLevel,
    output_format::{join_text, JsonRecord, OutputFormat},
    styler::{default_styler, Styler},
    timestamp::{LocalTime, TimeSource, DEFAULT_TIME_FORMAT, JSON_TIME_FORMAT},
};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;

/// Result of a logging call: `None` when the level was filtered out
pub type LogOutcome = Result<Option<String>>;

/// Console logger with a single level threshold
///
/// The logger is an owned value: callers construct it once and pass it
/// around. Logging takes `&self`; changing the threshold or time format takes
/// `&mut self`.
pub struct Logger {
    level: LogLevel,
    time_format: String,
    styler: Box<dyn Styler>,
    time_source: Box<dyn TimeSource>,
    appender: Mutex<Box<dyn Appender>>,
}

impl Logger {
    /// Create a logger at the default level writing to the console
    ///
    /// Does not consult configuration; see [`Logger::from_env`].
    #[must_use]
    pub fn new() -> Self {
        let appender: Box<dyn Appender> = Box::new(ConsoleAppender::new());
        Self {
            level: LogLevel::default(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            styler: default_styler(true),
            time_source: Box::new(LocalTime),
            appender: Mutex::new(appender),
        }
    }

    /// Create a console logger whose level comes from the `LOG_LEVEL`
    /// environment variable
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_console_logger::Logger;
    ///
    /// let logger = Logger::from_env().expect("stdout is writable");
    /// logger.info("service started").expect("stdout is writable");
    /// ```
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a console logger from `config`, reading the level from `source`
    pub fn from_config(config: LoggerConfig, source: impl ConfigSource + 'static) -> Result<Self> {
        Self::builder().config(config).config_source(source).build()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Replace the strftime pattern used by [`Logger::format_human`]
    ///
    /// The pattern is not validated here; a pattern the time source cannot
    /// render makes later human-readable formatting fail.
    pub fn set_time_format(&mut self, pattern: impl Into<String>) {
        self.time_format = pattern.into();
    }

    /// Whether a record at `level` passes the current threshold
    #[inline]
    pub fn should_emit(&self, level: LogLevel) -> bool {
        self.level.priority() >= level.priority()
    }

    /// Render `"[time] LABEL message"`, or `"LABEL message"` when
    /// `suppress_time` is set
    pub fn format_human(&self, level: LogLevel, message: &str, suppress_time: bool) -> Result<String> {
        let time = if suppress_time {
            None
        } else {
            let now = self.time_source.format_now(&self.time_format)?;
            Some(format!("[{}]", self.styler.dim(&now)))
        };
        let label = self.styler.level(level, level.label());

        Ok(join_text(time.as_deref(), &label, message))
    }

    /// Render a single-line JSON record
    ///
    /// The `time` field always uses `HH:MM:SS`, whatever the configured time
    /// format.
    pub fn format_json(&self, level: LogLevel, message: &str) -> Result<String> {
        let time = self.time_source.format_now(JSON_TIME_FORMAT)?;
        JsonRecord {
            time: &time,
            level,
            message,
        }
        .to_json()
    }

    /// Format and write a record if `level` passes the threshold
    ///
    /// Returns `Ok(None)` without formatting or writing anything when the
    /// record is filtered out. Otherwise the line goes to the stream of
    /// `level.scope()` and is returned.
    pub fn log(&self, level: LogLevel, message: &str, format: OutputFormat) -> LogOutcome {
        if !self.should_emit(level) {
            return Ok(None);
        }

        let line = match format {
            OutputFormat::Text => self.format_human(level, message, false)?,
            OutputFormat::Json => self.format_json(level, message)?,
        };

        self.appender.lock().append(level.scope(), &line)?;
        Ok(Some(line))
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }

    #[inline]
    pub fn error(&self, message: &str) -> LogOutcome {
        self.log(LogLevel::Error, message, OutputFormat::Text)
    }

    #[inline]
    pub fn warn(&self, message: &str) -> LogOutcome {
        self.log(LogLevel::Warn, message, OutputFormat::Text)
    }

    #[inline]
    pub fn info(&self, message: &str) -> LogOutcome {
        self.log(LogLevel::Info, message, OutputFormat::Text)
    }

    #[inline]
    pub fn debug(&self, message: &str) -> LogOutcome {
        self.log(LogLevel::Debug, message, OutputFormat::Text)
    }

    #[inline]
    pub fn error_json(&self, message: &str) -> LogOutcome {
        self.log(LogLevel::Error, message, OutputFormat::Json)
    }

    #[inline]
    pub fn warn_json(&self, message: &str) -> LogOutcome {
        self.log(LogLevel::Warn, message, OutputFormat::Json)
    }

    #[inline]
    pub fn info_json(&self, message: &str) -> LogOutcome {
        self.log(LogLevel::Info, message, OutputFormat::Json)
    }

    #[inline]
    pub fn debug_json(&self, message: &str) -> LogOutcome {
        self.log(LogLevel::Debug, message, OutputFormat::Json)
    }
}

/// Awaitable forms of the per-level methods
///
/// The returned futures are already complete: the record has been written
/// by the time the call returns, and awaiting yields the same outcome as
/// [`Logger::log`].
///
/// # Example
///
/// ```
/// use rust_console_logger::prelude::*;
///
/// let logger = Logger::builder().level(LogLevel::Warn).build().unwrap();
/// let outcome = tokio_test::block_on(logger.info_async("hidden", OutputFormat::Text));
/// assert!(outcome.unwrap().is_none());
/// ```
#[cfg(feature = "async")]
impl Logger {
    pub fn error_async(&self, message: &str, format: OutputFormat) -> std::future::Ready<LogOutcome> {
        std::future::ready(self.log(LogLevel::Error, message, format))
    }

    pub fn warn_async(&self, message: &str, format: OutputFormat) -> std::future::Ready<LogOutcome> {
        std::future::ready(self.log(LogLevel::Warn, message, format))
    }

    pub fn info_async(&self, message: &str, format: OutputFormat) -> std::future::Ready<LogOutcome> {
        std::future::ready(self.log(LogLevel::Info, message, format))
    }

    pub fn debug_async(&self, message: &str, format: OutputFormat) -> std::future::Ready<LogOutcome> {
        std::future::ready(self.log(LogLevel::Debug, message, format))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("time_format", &self.time_format)
            .field("appender", &self.appender.lock().name())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Unless [`LoggerBuilder::level`] is given, the level is resolved from the
/// configured variable of the config source (the process environment by
/// default). Building emits one debug record announcing the resolved level;
/// it is filtered like any other record, so it only appears at `debug`.
///
/// # Example
/// ```
/// use rust_console_logger::prelude::*;
/// use std::collections::HashMap;
///
/// let values = HashMap::from([("APP_LOG".to_string(), "warn".to_string())]);
/// let logger = Logger::builder()
///     .config(LoggerConfig::new().with_level_var("APP_LOG"))
///     .config_source(values)
///     .time_format("%H:%M:%S%.3f")
///     .styler(PlainStyler)
///     .appender(MemoryAppender::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.level(), LogLevel::Warn);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    level: Option<LogLevel>,
    source: Box<dyn ConfigSource>,
    styler: Option<Box<dyn Styler>>,
    time_source: Option<Box<dyn TimeSource>>,
    appender: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            level: None,
            source: Box::new(EnvSource),
            styler: None,
            time_source: None,
            appender: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set where the level variable is read from
    #[must_use = "builder methods return a new value"]
    pub fn config_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Use `level` instead of resolving it from configuration
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, pattern: impl Into<String>) -> Self {
        self.config.time_format = pattern.into();
        self
    }

    /// Toggle ANSI colors for the default styler
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.config.use_colors = use_colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn styler<S: Styler + 'static>(mut self, styler: S) -> Self {
        self.styler = Some(Box::new(styler));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_source<T: TimeSource + 'static>(mut self, time_source: T) -> Self {
        self.time_source = Some(Box::new(time_source));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Build the Logger and announce its level
    ///
    /// Fails only if writing the announcement fails.
    pub fn build(self) -> Result<Logger> {
        let LoggerBuilder {
            config,
            level,
            source,
            styler,
            time_source,
            appender,
        } = self;

        let level = level.unwrap_or_else(|| config.resolve_level(&*source));

        let logger = Logger {
            level,
            time_format: config.time_format,
            styler: styler.unwrap_or_else(|| default_styler(config.use_colors)),
            time_source: time_source.unwrap_or_else(|| Box::new(LocalTime)),
            appender: Mutex::new(appender.unwrap_or_else(|| Box::new(ConsoleAppender::new()))),
        };

        logger.debug(&format!("log level set to {}", level.name()))?;
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::{FixedTime, LoggerError, PlainStyler, Scope};
    use chrono::{FixedOffset, TimeZone};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fixed_time() -> FixedTime {
        let offset = FixedOffset::east_opt(0).expect("valid offset");
        FixedTime::new(
            offset
                .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
                .single()
                .expect("valid datetime"),
        )
    }

    fn test_logger(level: LogLevel) -> (Logger, MemoryAppender) {
        let capture = MemoryAppender::new();
        let logger = Logger::builder()
            .level(level)
            .styler(PlainStyler)
            .time_source(fixed_time())
            .appender(capture.clone())
            .build()
            .expect("memory appender never fails");
        (logger, capture)
    }

    fn env_logger(value: &str) -> (Logger, MemoryAppender) {
        let capture = MemoryAppender::new();
        let values = HashMap::from([("LOG_LEVEL".to_string(), value.to_string())]);
        let logger = Logger::builder()
            .config_source(values)
            .styler(PlainStyler)
            .time_source(fixed_time())
            .appender(capture.clone())
            .build()
            .expect("memory appender never fails");
        (logger, capture)
    }

    struct CountingTime(Arc<AtomicUsize>);

    impl TimeSource for CountingTime {
        fn format_now(&self, _pattern: &str) -> Result<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok("00:00:00".to_string())
        }
    }

    struct BrokenPipe;

    impl Appender for BrokenPipe {
        fn append(&mut self, scope: Scope, _line: &str) -> Result<()> {
            Err(LoggerError::write(
                scope,
                std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"),
            ))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[test]
    fn test_new_defaults() {
        let logger = Logger::new();
        assert_eq!(logger.level(), LogLevel::Info);
        assert_eq!(logger.time_format(), "%H:%M:%S");
    }

    #[test]
    fn test_threshold_resolution() {
        assert_eq!(env_logger("").0.level(), LogLevel::Info);
        assert_eq!(env_logger("1").0.level(), LogLevel::Warn);
        assert_eq!(env_logger("99").0.level(), LogLevel::Info);
        assert_eq!(env_logger("debug").0.level(), LogLevel::Debug);
        assert_eq!(env_logger("bogus").0.level(), LogLevel::Info);
    }

    #[test]
    fn test_unset_config_defaults_to_info() {
        let logger = Logger::builder()
            .config_source(HashMap::new())
            .appender(MemoryAppender::new())
            .build()
            .unwrap();
        assert_eq!(logger.level(), LogLevel::Info);
    }

    #[test]
    fn test_announcement_visible_only_at_debug() {
        let (_, capture) = env_logger("debug");
        assert_eq!(capture.lines(Scope::Out), vec!["[10:30:45] DEBUG log level set to debug"]);

        let (_, capture) = env_logger("info");
        assert!(capture.is_empty());

        let (_, capture) = env_logger("3");
        assert_eq!(capture.len(), 1);
    }

    #[test]
    fn test_should_emit_at_warn() {
        let (logger, _) = test_logger(LogLevel::Warn);
        assert!(logger.should_emit(LogLevel::Error));
        assert!(logger.should_emit(LogLevel::Warn));
        assert!(!logger.should_emit(LogLevel::Info));
        assert!(!logger.should_emit(LogLevel::Debug));
    }

    #[test]
    fn test_set_level() {
        let (mut logger, _) = test_logger(LogLevel::Info);
        logger.set_level(LogLevel::Error);
        assert_eq!(logger.level(), LogLevel::Error);
        assert!(!logger.should_emit(LogLevel::Warn));
    }

    #[test]
    fn test_format_human() {
        let (logger, _) = test_logger(LogLevel::Info);

        let line = logger.format_human(LogLevel::Info, "ready", false).unwrap();
        assert_eq!(line, "[10:30:45] INFO ready");

        let line = logger.format_human(LogLevel::Warn, "careful", true).unwrap();
        assert_eq!(line, "WARN careful");
    }

    #[test]
    fn test_time_format_affects_only_human_output() {
        let (mut logger, _) = test_logger(LogLevel::Info);
        let json_before = logger.format_json(LogLevel::Info, "x").unwrap();

        logger.set_time_format("%Y-%m-%d %H:%M");
        assert_eq!(
            logger.format_human(LogLevel::Info, "x", false).unwrap(),
            "[2025-01-08 10:30] INFO x"
        );
        assert_eq!(logger.format_json(LogLevel::Info, "x").unwrap(), json_before);
    }

    #[test]
    fn test_invalid_time_format_fails_human_only() {
        let (mut logger, capture) = test_logger(LogLevel::Info);
        logger.set_time_format("%");

        let err = logger.info("x").unwrap_err();
        assert!(matches!(err, LoggerError::TimeFormat { .. }));
        assert!(capture.is_empty());

        assert!(logger.format_human(LogLevel::Info, "x", true).is_ok());
        assert!(logger.info_json("x").unwrap().is_some());
    }

    #[test]
    fn test_format_json() {
        let (logger, _) = test_logger(LogLevel::Info);
        let json = logger.format_json(LogLevel::Error, "hello").unwrap();

        assert_eq!(
            json,
            r#"{"time":"10:30:45","level":{"name":"error","priority":0,"scope":"ERR"},"message":"hello"}"#
        );
    }

    #[test]
    fn test_filtered_log_does_no_work() {
        let calls = Arc::new(AtomicUsize::new(0));
        let capture = MemoryAppender::new();
        let logger = Logger::builder()
            .level(LogLevel::Info)
            .time_source(CountingTime(Arc::clone(&calls)))
            .appender(capture.clone())
            .build()
            .unwrap();

        assert_eq!(logger.debug("x").unwrap(), None);
        assert_eq!(logger.debug_json("x").unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(capture.is_empty());

        assert!(logger.info("y").unwrap().is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_log_routes_by_scope() {
        let (logger, capture) = test_logger(LogLevel::Debug);
        capture.clear();

        logger.error("e").unwrap();
        logger.warn("w").unwrap();
        logger.info("i").unwrap();
        logger.debug("d").unwrap();

        assert_eq!(capture.lines(Scope::Err), vec!["[10:30:45] ERROR e", "[10:30:45] WARN w"]);
        assert_eq!(capture.lines(Scope::Out), vec!["[10:30:45] INFO i", "[10:30:45] DEBUG d"]);
    }

    #[test]
    fn test_log_returns_written_line() {
        let (logger, capture) = test_logger(LogLevel::Info);
        let line = logger.info("ready").unwrap().expect("info passes at info");

        assert!(line.contains("INFO"));
        assert!(line.contains("ready"));
        assert_eq!(capture.lines(Scope::Out), vec![line]);
    }

    #[test]
    fn test_empty_message_is_emitted() {
        let (logger, _) = test_logger(LogLevel::Info);
        let line = logger
            .log(LogLevel::Info, "", OutputFormat::Text)
            .unwrap()
            .expect("emitted");
        assert_eq!(line, "[10:30:45] INFO ");
    }

    #[test]
    fn test_write_failure_propagates() {
        let logger = Logger::builder()
            .level(LogLevel::Info)
            .appender(BrokenPipe)
            .build()
            .expect("announcement is filtered at info");

        let err = logger.warn("careful").unwrap_err();
        assert!(matches!(err, LoggerError::Write { stream: Scope::Err, .. }));

        // Filtered records never reach the appender
        assert!(logger.debug("quiet").unwrap().is_none());
    }

    #[test]
    fn test_announcement_write_failure_fails_build() {
        let result = Logger::builder()
            .level(LogLevel::Debug)
            .appender(BrokenPipe)
            .build();
        assert!(matches!(result, Err(LoggerError::Write { .. })));
    }

    #[cfg(feature = "async")]
    #[test]
    fn test_async_wrappers_resolve_immediately() {
        let (logger, capture) = test_logger(LogLevel::Warn);

        let outcome = tokio_test::block_on(logger.warn_async("careful", OutputFormat::Text));
        assert_eq!(outcome.unwrap().as_deref(), Some("[10:30:45] WARN careful"));

        let outcome = tokio_test::block_on(logger.info_async("hidden", OutputFormat::Json));
        assert!(outcome.unwrap().is_none());

        // Written before the future was awaited
        let _pending = logger.error_async("boom", OutputFormat::Text);
        assert_eq!(capture.lines(Scope::Err).len(), 2);
    }

    #[test]
    fn test_logger_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }
}
