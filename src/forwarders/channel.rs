//! Channel forwarder
//!
//! Hands events to another part of the application through a bounded
//! channel, for example a task that owns the connection to the collector.

use crate::core::{Event, EventForwarder};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::sync::atomic::{AtomicU64, Ordering};

/// Forwarder that pushes events into a bounded channel.
///
/// `submit` never blocks. When the channel is full the event is dropped and
/// counted; a warning goes to stderr on the first drop and every 1000th
/// after that.
///
/// # Example
///
/// ```
/// use rust_module_logger::prelude::*;
/// use std::sync::Arc;
///
/// let forwarder = Arc::new(ChannelForwarder::new(16));
/// let events = forwarder.receiver();
///
/// let mut logger = Logger::new(Arc::new(MemoryAppender::new()), LoggerConfig::default());
/// logger.attach_forwarder(Some(forwarder.clone())).unwrap();
/// logger.warnln("queue depth high");
///
/// let event = events.try_recv().unwrap();
/// assert_eq!(event.state, "WARN");
/// ```
pub struct ChannelForwarder {
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    dropped: AtomicU64,
}

impl ChannelForwarder {
    /// Create a forwarder whose channel holds up to `capacity` events (at least one)
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity.max(1));
        Self {
            sender,
            receiver,
            dropped: AtomicU64::new(0),
        }
    }

    /// Consumer side of the channel; may be cloned freely
    pub fn receiver(&self) -> Receiver<Event> {
        self.receiver.clone()
    }

    /// Number of events dropped because the channel was full
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn record_drop(&self) {
        let dropped_count = self.dropped.fetch_add(1, Ordering::Relaxed);

        if should_alert(dropped_count) {
            eprintln!(
                "[LOGGER WARNING] Event channel full, {} events dropped. \
                 Consider increasing channel capacity.",
                dropped_count + 1
            );
        }
    }
}

/// Alert on first drop and every 1000th thereafter.
///
/// `dropped_before` is the count prior to the drop being recorded.
fn should_alert(dropped_before: u64) -> bool {
    dropped_before == 0 || (dropped_before + 1) % 1000 == 0
}

impl EventForwarder for ChannelForwarder {
    fn submit(&self, event: Event) {
        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => self.record_drop(),
            // The forwarder holds a receiver itself, so the channel cannot disconnect.
            Err(TrySendError::Disconnected(_)) => {}
        }
    }
}
