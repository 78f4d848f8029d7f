//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod event;
pub mod forwarder;
pub mod line_format;
pub mod log_level;
pub mod logger;

pub use appender::Appender;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use event::Event;
pub use forwarder::EventForwarder;
pub use log_level::{level_name, level_rank, LogLevel, INVALID_RANK};
pub use logger::{Logger, LoggerBuilder};
