//! In-memory forwarder

use crate::core::{Event, EventForwarder};
use parking_lot::Mutex;

/// Records every submitted event.
#[derive(Debug, Default)]
pub struct MemoryForwarder {
    events: Mutex<Vec<Event>>,
}

impl MemoryForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of submitted events, oldest first
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Level names of submitted events, oldest first
    pub fn states(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.state.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventForwarder for MemoryForwarder {
    fn submit(&self, event: Event) {
        self.events.lock().push(event);
    }
}
