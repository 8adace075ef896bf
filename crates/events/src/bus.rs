//! Event publishing/subscription abstraction (mechanics only).
//!
//! User actions that leave the catalog (view more, add to cart) are published
//! through an [`EventSink`]. The sink is chosen at the composition root: a
//! logging handler in the shell, an [`crate::InMemoryEventBus`] in tests, or
//! [`NoopSink`] when nobody listens.
//!
//! Publishing is fire-and-forget from the user's point of view. `publish` still
//! returns a `Result` so the caller can log a failed delivery.

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// A subscription to an event stream.
///
/// Each subscription gets a copy of every message published after it was
/// created (broadcast semantics).
///
/// ```ignore
/// let bus = InMemoryEventBus::new();
/// let subscription = bus.subscribe();
/// bus.publish(message)?;
/// let received = subscription.try_recv()?;
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain every message that is already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Receiving end of outward notifications.
///
/// `publish` is the single required handler. Implementations must not call
/// back into the publisher.
pub trait EventSink<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;
}

/// A sink that can also hand out subscriptions (pub/sub).
pub trait EventBus<M>: EventSink<M> {
    fn subscribe(&self) -> Subscription<M>;
}

/// Sink that discards everything. Default when no handler is wired up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopSink;

impl<M> EventSink<M> for NoopSink {
    type Error = Infallible;

    fn publish(&self, _message: M) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<M, S> EventSink<M> for Arc<S>
where
    S: EventSink<M> + ?Sized,
{
    type Error = S::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }
}

impl<M, S> EventSink<M> for &S
where
    S: EventSink<M> + ?Sized,
{
    type Error = S::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_accepts_anything() {
        let sink = NoopSink;
        assert!(EventSink::<u32>::publish(&sink, 1).is_ok());
        assert!(EventSink::<&str>::publish(&sink, "ignored").is_ok());
    }

    #[test]
    fn borrowed_and_shared_sinks_forward_to_the_inner_sink() {
        let sink = Arc::new(NoopSink);
        assert!(EventSink::<u8>::publish(&sink, 3).is_ok());
        let borrowed: &NoopSink = &sink;
        assert!(EventSink::<u8>::publish(&borrowed, 4).is_ok());
    }
}
