//! Forwarder trait for monitoring collectors

use super::event::Event;

/// Client that ships events to an external monitoring collector.
///
/// Submission is fire-and-forget: the logger never observes the outcome, so
/// implementations deal with their own transport failures.
pub trait EventForwarder: Send + Sync {
    fn submit(&self, event: Event);
}
