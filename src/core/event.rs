//! Monitoring events

use serde::{Deserialize, Serialize};

/// Record submitted to an [`EventForwarder`](super::EventForwarder).
///
/// `service` is the emitting logger's prefix, `state` the level name and
/// `description` the formatted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub service: String,
    pub state: String,
    pub description: String,
}

impl Event {
    pub fn new(
        service: impl Into<String>,
        state: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            state: state.into(),
            description: description.into(),
        }
    }
}
