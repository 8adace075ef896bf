//! Outward event plumbing for the storefront.
//!
//! The catalog core never calls the cart or navigation subsystems directly;
//! it publishes events into an [`EventSink`] supplied by the composition root.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, EventSink, NoopSink, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
