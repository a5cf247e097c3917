//! Topic-based event bus for encounter events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need.

mod bus;

pub use bus::{Event, EventBus, Topic};
