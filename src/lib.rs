//! # Rust Module Logger
//!
//! An embeddable levelled logger with hierarchical module prefixes and
//! optional forwarding of events to a monitoring collector.
//!
//! ## Features
//!
//! - **Levelled output**: OFF, FATAL, ERROR, WARN, INFO, DEBUG, TRACE, ALL
//! - **Modules**: derive child loggers with an extended prefix
//! - **Event forwarding**: fatal through info messages are submitted to an
//!   attached collector client, independently of the console threshold
//! - **Thread safe**: emit calls take `&self` and never mutate

pub mod appenders;
pub mod core;
pub mod forwarders;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender, WriterAppender};
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::core::{
        level_name, level_rank, Appender, Event, EventForwarder, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, Result, INVALID_RANK,
    };
    pub use crate::forwarders::{ChannelForwarder, MemoryForwarder};
    #[cfg(feature = "network")]
    pub use crate::forwarders::TcpForwarder;
}

pub use appenders::{ConsoleAppender, MemoryAppender, WriterAppender};
#[cfg(feature = "file")]
pub use appenders::FileAppender;
pub use core::{
    level_name, level_rank, Appender, Event, EventForwarder, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, Result, INVALID_RANK,
};
pub use forwarders::{ChannelForwarder, MemoryForwarder};
#[cfg(feature = "network")]
pub use forwarders::TcpForwarder;
