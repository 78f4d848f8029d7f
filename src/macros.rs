//! Logging macros for ergonomic log message formatting.
//!
//! Each macro forwards `format_args!` to the matching formatted method on a
//! [`Logger`](crate::Logger), so no newline is appended: put `\n` in the
//! template when the line should end.
//!
//! # Examples
//!
//! ```
//! use rust_module_logger::prelude::*;
//! use rust_module_logger::infof;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemoryAppender::new());
//! let logger = Logger::new(sink.clone(), LoggerConfig::default().with_timestamp(false));
//!
//! let port = 8080;
//! infof!(logger, "listening on port {}\n", port);
//! assert_eq!(sink.contents(), "INFO | service | listening on port 8080\n");
//! ```

/// Log a formatted fatal message. Does NOT abort.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

/// Log a formatted error message.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a formatted warning message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

/// Log a formatted info message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a formatted debug message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log a formatted trace message.
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(format_args!($($arg)+))
    };
}
