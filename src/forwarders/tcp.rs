//! TCP forwarder for remote collectors
//!
//! Sends each event as one JSON object per line over a TCP connection.

use crate::core::{Event, EventForwarder, LoggerError, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

const WRITE_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_millis(500);
const RECONNECT_BACKOFF: Duration = Duration::from_secs(1);

/// Forwarder that writes JSON lines to a TCP collector
///
/// Transport failures are reported on stderr and never reach the logger.
/// After a failed write the forwarder reconnects once and resends. Connects
/// time out after 500ms, run without holding the stream lock, and are
/// attempted at most once per second; events failing in between are dropped.
///
/// # Example
///
/// ```no_run
/// use rust_module_logger::prelude::*;
/// use std::sync::Arc;
///
/// let forwarder = TcpForwarder::new("127.0.0.1:5555")
///     .expect("Failed to connect to collector");
///
/// let mut logger = Logger::builder().prefix("api").build();
/// logger.attach_forwarder(Some(Arc::new(forwarder))).unwrap();
/// logger.errorln("upstream timed out");
/// ```
pub struct TcpForwarder {
    stream: Mutex<Option<TcpStream>>,
    address: String,
    reconnect_on_error: bool,
    last_reconnect: Mutex<Option<Instant>>,
}

impl TcpForwarder {
    /// Connect to a collector
    ///
    /// # Errors
    ///
    /// Returns error if connection fails
    pub fn new(addr: impl ToSocketAddrs + ToString) -> Result<Self> {
        let address = addr.to_string();
        let stream = Self::connect(&address)?;

        Ok(Self {
            stream: Mutex::new(Some(stream)),
            address,
            reconnect_on_error: true,
            last_reconnect: Mutex::new(None),
        })
    }

    /// Enable or disable automatic reconnection on errors
    ///
    /// Default: enabled
    #[must_use]
    pub fn with_reconnect(mut self, enable: bool) -> Self {
        self.reconnect_on_error = enable;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_connected(&self) -> bool {
        self.stream.lock().is_some()
    }

    fn connect(address: &str) -> Result<TcpStream> {
        let mut last_err = None;

        for addr in address.to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT) {
                Ok(stream) => {
                    stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
                    stream.set_nodelay(true)?;
                    return Ok(stream);
                }
                Err(e) => last_err = Some(e),
            }
        }

        Err(match last_err {
            Some(e) => e.into(),
            None => LoggerError::writer(format!("No address resolved for '{}'", address)),
        })
    }

    fn encode(event: &Event) -> Result<Vec<u8>> {
        let mut payload = serde_json::to_vec(event)?;
        payload.push(b'\n');
        Ok(payload)
    }

    fn send(&self, payload: &[u8]) -> Result<()> {
        // The stream lock is released before any reconnect attempt.
        let write_err = {
            let mut guard = self.stream.lock();

            let result = match guard.as_mut() {
                Some(stream) => stream.write_all(payload),
                None if self.reconnect_on_error => {
                    Err(io::Error::new(io::ErrorKind::NotConnected, "not connected"))
                }
                None => return Err(LoggerError::writer("Collector stream not connected")),
            };

            match result {
                Ok(()) => return Ok(()),
                Err(e) => {
                    *guard = None;
                    e
                }
            }
        };

        if !self.reconnect_on_error {
            return Err(write_err.into());
        }

        self.reconnect_and_send(payload).map_err(|reconnect_err| {
            LoggerError::writer(format!(
                "Failed to send event and reconnect: {} (reconnect: {})",
                write_err, reconnect_err
            ))
        })
    }

    fn reconnect_and_send(&self, payload: &[u8]) -> Result<()> {
        {
            let mut last = self.last_reconnect.lock();
            if let Some(at) = *last {
                if at.elapsed() < RECONNECT_BACKOFF {
                    return Err(LoggerError::writer("Reconnect attempted too recently"));
                }
            }
            *last = Some(Instant::now());
        }

        let mut stream = Self::connect(&self.address)?;
        stream.write_all(payload)?;
        *self.stream.lock() = Some(stream);
        Ok(())
    }
}

impl EventForwarder for TcpForwarder {
    fn submit(&self, event: Event) {
        let outcome = Self::encode(&event).and_then(|payload| self.send(&payload));
        if let Err(e) = outcome {
            eprintln!("[LOGGER ERROR] Forwarding to {} failed: {}", self.address, e);
        }
    }
}
