//! Event forwarder implementations

pub mod channel;
pub mod memory;
#[cfg(feature = "network")]
pub mod tcp;

pub use channel::ChannelForwarder;
pub use memory::MemoryForwarder;
#[cfg(feature = "network")]
pub use tcp::TcpForwarder;

pub use crate::core::EventForwarder;
