//! Appender trait for log output destinations

use super::error::Result;

/// Output sink for rendered log lines.
///
/// Each `append` call receives one complete line and must write it atomically
/// with respect to concurrent calls; interleaving whole lines is fine.
pub trait Appender: Send + Sync {
    fn append(&self, line: &str) -> Result<()>;
    fn name(&self) -> &str;
}
