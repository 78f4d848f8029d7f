//! In-memory appender

use crate::core::{Appender, Result};
use parking_lot::Mutex;

/// Keeps every appended line in memory.
///
/// Handy for tests and for embedders that display recent output themselves.
#[derive(Debug, Default)]
pub struct MemoryAppender {
    lines: Mutex<Vec<String>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines in the order they were appended
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// All lines concatenated
    pub fn contents(&self) -> String {
        self.lines.lock().concat()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
