//! File appender implementation

use crate::core::{Appender, LoggerError, Result};
use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a file, creating it if needed.
///
/// Output is line-buffered, so each appended line reaches the file before
/// `append` returns. The buffer is also flushed on drop.
pub struct FileAppender {
    writer: Mutex<LineWriter<File>>,
    path: PathBuf,
    locked: bool,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(LineWriter::new(file)),
            path,
            locked: false,
        })
    }

    /// Take an exclusive advisory lock on the file for the appender's lifetime
    ///
    /// Fails if another process already holds the lock.
    ///
    /// ```no_run
    /// use rust_module_logger::appenders::FileAppender;
    ///
    /// let appender = FileAppender::new("/var/log/app.log")?.with_exclusive_lock()?;
    /// # Ok::<(), rust_module_logger::LoggerError>(())
    /// ```
    pub fn with_exclusive_lock(mut self) -> Result<Self> {
        self.writer
            .get_mut()
            .get_ref()
            .try_lock_exclusive()
            .map_err(|_| LoggerError::file_lock(self.path.display().to_string()))?;
        self.locked = true;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl Appender for FileAppender {
    fn append(&self, line: &str) -> Result<()> {
        self.writer.lock().write_all(line.as_bytes())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let writer = self.writer.get_mut();
        let _ = writer.flush();
        if self.locked {
            let _ = writer.get_ref().unlock();
        }
    }
}
