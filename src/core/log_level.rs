//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rank returned for a level name that is not recognized.
///
/// A logger whose threshold resolves to this rank writes nothing to its sink,
/// not even fatal messages, since no level rank compares below it.
pub const INVALID_RANK: i32 = -1;

/// Severity of a log message, ordered by verbosity.
///
/// `Off` and `All` are thresholds only; messages are always logged at one of
/// the six levels in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Off = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    #[default]
    Info = 4,
    Debug = 5,
    Trace = 6,
    All = 7,
}

impl LogLevel {
    /// Levels a message can be emitted at, most severe first.
    pub const EMITTABLE: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Every level including the `Off` and `All` thresholds, in rank order.
    pub const ALL_LEVELS: [LogLevel; 8] = [
        LogLevel::Off,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
        LogLevel::All,
    ];

    #[inline]
    pub fn rank(&self) -> i32 {
        *self as i32
    }

    pub fn from_rank(rank: i32) -> Option<Self> {
        match rank {
            0 => Some(LogLevel::Off),
            1 => Some(LogLevel::Fatal),
            2 => Some(LogLevel::Error),
            3 => Some(LogLevel::Warn),
            4 => Some(LogLevel::Info),
            5 => Some(LogLevel::Debug),
            6 => Some(LogLevel::Trace),
            7 => Some(LogLevel::All),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "OFF",
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::All => "ALL",
        }
    }

    /// Whether messages at this level are submitted to an attached forwarder.
    ///
    /// Debug and trace output stays local to the sink.
    #[inline]
    pub fn forwards(&self) -> bool {
        matches!(
            self,
            LogLevel::Fatal | LogLevel::Error | LogLevel::Warn | LogLevel::Info
        )
    }
}

/// Human readable name for a rank. Ranks outside `0..=7` render as `"ALL"`.
pub fn level_name(rank: i32) -> &'static str {
    LogLevel::from_rank(rank).unwrap_or(LogLevel::All).to_str()
}

/// Rank for a case-insensitive level name, or [`INVALID_RANK`] if the name is unknown.
pub fn level_rank(name: &str) -> i32 {
    name.parse::<LogLevel>()
        .map(|level| level.rank())
        .unwrap_or(INVALID_RANK)
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(LogLevel::Off),
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            "ALL" => Ok(LogLevel::All),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
