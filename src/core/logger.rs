//! Main logger implementation

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::{LoggerError, Result},
    event::Event,
    forwarder::EventForwarder,
    line_format::render_line,
    log_level::{level_rank, LogLevel, INVALID_RANK},
};
use chrono::Local;
use std::fmt;
use std::sync::Arc;

/// Levelled logger with a module prefix and optional event forwarding.
///
/// Every emit call first checks the level against the configured threshold
/// and writes one line to the sink if it passes. Independently of that check,
/// fatal, error, warn and info calls submit an [`Event`] to the attached
/// forwarder, if any. Fatal is a label only; it never aborts.
///
/// An unrecognized `log_level` in the configuration resolves to
/// [`INVALID_RANK`], which makes the logger write nothing at all. Use
/// [`LoggerConfig::validate`] or [`Logger::is_silent`] to detect this.
///
/// # Example
///
/// ```
/// use rust_module_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemoryAppender::new());
/// let config = LoggerConfig::default()
///     .with_prefix("svc")
///     .with_log_level("WARN")
///     .with_timestamp(false);
/// let logger = Logger::new(sink.clone(), config);
///
/// logger.warnln("disk low");
/// logger.infoln("started");
/// assert_eq!(sink.contents(), "WARN | svc | disk low\n");
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Appender>,
    config: LoggerConfig,
    level: i32,
    forwarder: Option<Arc<dyn EventForwarder>>,
}

impl Logger {
    pub fn new(sink: Arc<dyn Appender>, config: LoggerConfig) -> Self {
        let level = level_rank(&config.log_level);
        Self {
            sink,
            config,
            level,
            forwarder: None,
        }
    }

    /// Create a logger for a submodule.
    ///
    /// The child shares this logger's sink and forwarder and gets a copy of
    /// its configuration with `suffix` appended to the prefix as-is, so any
    /// delimiter belongs in `suffix`. Attaching a forwarder to either logger
    /// afterwards does not affect the other.
    ///
    /// ```
    /// use rust_module_logger::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let root = Logger::new(Arc::new(MemoryAppender::new()), LoggerConfig::default());
    /// let db = root.new_module(".db").new_module(".pool");
    /// assert_eq!(db.prefix(), "service.db.pool");
    /// ```
    #[must_use]
    pub fn new_module(&self, suffix: &str) -> Self {
        let mut config = self.config.clone();
        config.prefix.push_str(suffix);

        Self {
            sink: Arc::clone(&self.sink),
            config,
            level: self.level,
            forwarder: self.forwarder.clone(),
        }
    }

    /// Register the client that receives events from this logger.
    ///
    /// Passing `None` returns [`LoggerError::NilClient`] and keeps the current
    /// forwarder. Only this instance is rebound; loggers derived earlier keep
    /// the forwarder they were created with.
    pub fn attach_forwarder(&mut self, client: Option<Arc<dyn EventForwarder>>) -> Result<()> {
        let client = client.ok_or(LoggerError::NilClient)?;
        self.forwarder = Some(client);
        Ok(())
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn prefix(&self) -> &str {
        &self.config.prefix
    }

    /// Resolved threshold rank, [`INVALID_RANK`] for an unknown level name.
    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn has_forwarder(&self) -> bool {
        self.forwarder.is_some()
    }

    /// Whether the configured level name was unknown, leaving the sink unused.
    pub fn is_silent(&self) -> bool {
        self.level == INVALID_RANK
    }

    /// Whether a message at `level` would be written to the sink.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.rank() <= self.level
    }

    fn print(&self, level: LogLevel, message: &str, newline: bool) {
        let now = self.config.add_timestamp.then(Local::now);
        let line = render_line(now.as_ref(), level, &self.config.prefix, message, newline);

        if let Err(e) = self.sink.append(&line) {
            eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", self.sink.name(), e);
        }
    }

    fn forward(&self, level: LogLevel, message: &str) {
        if let Some(ref forwarder) = self.forwarder {
            forwarder.submit(Event::new(&self.config.prefix, level.to_str(), message));
        }
    }

    fn emit(&self, level: LogLevel, message: &str, newline: bool) {
        if self.enabled(level) {
            self.print(level, message, newline);
        }
        if level.forwards() {
            self.forward(level, message);
        }
    }

    fn emit_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        // Skip formatting when neither the sink nor a forwarder wants the message.
        if !self.enabled(level) && !(level.forwards() && self.forwarder.is_some()) {
            return;
        }
        let message = fmt::format(args);
        self.emit(level, &message, false);
    }

    /// Print a fatal message. Does NOT abort the process.
    #[inline]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(LogLevel::Fatal, args);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(LogLevel::Error, args);
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(LogLevel::Warn, args);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(LogLevel::Info, args);
    }

    /// Print a debug message. Never forwarded.
    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(LogLevel::Debug, args);
    }

    /// Print a trace message. Never forwarded.
    #[inline]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(LogLevel::Trace, args);
    }

    /// Print a fatal line. Does NOT abort the process.
    #[inline]
    pub fn fatalln(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Fatal, message.as_ref(), true);
    }

    #[inline]
    pub fn errorln(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Error, message.as_ref(), true);
    }

    #[inline]
    pub fn warnln(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Warn, message.as_ref(), true);
    }

    #[inline]
    pub fn infoln(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Info, message.as_ref(), true);
    }

    #[inline]
    pub fn debugln(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Debug, message.as_ref(), true);
    }

    #[inline]
    pub fn traceln(&self, message: impl AsRef<str>) {
        self.emit(LogLevel::Trace, message.as_ref(), true);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.sink.name())
            .field("config", &self.config)
            .field("level", &self.level)
            .field("has_forwarder", &self.forwarder.is_some())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_module_logger::prelude::*;
/// use std::sync::Arc;
///
/// let events = Arc::new(MemoryForwarder::new());
/// let logger = Logger::builder()
///     .prefix("billing")
///     .log_level(LogLevel::Debug)
///     .timestamp(false)
///     .appender(MemoryAppender::new())
///     .forwarder(events.clone())
///     .build();
///
/// logger.errorln("charge failed");
/// assert_eq!(events.events().len(), 1);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Arc<dyn Appender>>,
    forwarder: Option<Arc<dyn EventForwarder>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: None,
            forwarder: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.log_level = level.to_str().to_string();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp(mut self, add_timestamp: bool) -> Self {
        self.config.add_timestamp = add_timestamp;
        self
    }

    /// Set the sink. If never called, lines go to stdout.
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.sink = Some(Arc::new(appender));
        self
    }

    /// Set a sink that is also held elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.sink = Some(appender);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn forwarder(mut self, forwarder: Arc<dyn EventForwarder>) -> Self {
        self.forwarder = Some(forwarder);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink: Arc<dyn Appender> = match self.sink {
            Some(sink) => sink,
            None => Arc::new(crate::appenders::ConsoleAppender::new()),
        };
        let mut logger = Logger::new(sink, self.config);
        logger.forwarder = self.forwarder;
        logger
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
