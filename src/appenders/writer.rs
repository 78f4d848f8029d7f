//! Appender over any `std::io::Write`

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::io::Write;

/// Wraps an arbitrary writer, serializing lines through a mutex.
///
/// # Example
///
/// ```
/// use rust_module_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(WriterAppender::new(Vec::<u8>::new()));
/// let logger = Logger::new(sink.clone(), LoggerConfig::default().with_timestamp(false));
/// logger.infoln("hello");
///
/// let bytes = sink.with_writer(|buf| buf.clone());
/// assert_eq!(String::from_utf8(bytes).unwrap(), "INFO | service | hello\n");
/// ```
pub struct WriterAppender<W: Write + Send> {
    writer: Mutex<W>,
    flush_each_line: bool,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            flush_each_line: false,
        }
    }

    /// Flush the writer after every line
    ///
    /// Default: disabled
    #[must_use]
    pub fn with_flush_each_line(mut self, enable: bool) -> Self {
        self.flush_each_line = enable;
        self
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    /// Run `f` with exclusive access to the underlying writer
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        if self.flush_each_line {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_whole_lines() {
        let appender = WriterAppender::new(Vec::new());
        appender.append("WARN | a | one\n").unwrap();
        appender.append("WARN | a | two\n").unwrap();
        assert_eq!(appender.into_inner(), b"WARN | a | one\nWARN | a | two\n".to_vec());
    }

    #[test]
    fn test_write_error_propagates() {
        let appender = WriterAppender::new(BrokenPipe).with_flush_each_line(true);
        let err = appender.append("x\n").unwrap_err();
        assert!(matches!(err, crate::core::LoggerError::IoError(_)));
    }
}
