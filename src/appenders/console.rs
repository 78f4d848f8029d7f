//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::Write;

/// Which standard stream a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

pub struct ConsoleAppender {
    stream: ConsoleStream,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            stream: ConsoleStream::default(),
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, line: &str) -> Result<()> {
        // Holding the stream lock for the single write keeps lines whole.
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().lock().write_all(line.as_bytes())?,
            ConsoleStream::Stderr => std::io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "console",
            ConsoleStream::Stderr => "console-stderr",
        }
    }
}
