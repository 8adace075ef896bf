use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts about what the user asked for)
/// - **versioned** (schema evolution)
/// - **fire-and-forget** (the publisher expects no reply)
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "catalog.cart.add_requested").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the user action happened.
    fn occurred_at(&self) -> DateTime<Utc>;
}
