//! Entity trait: identity that outlives any particular projection.

/// Entity marker + minimal interface.
///
/// Filtering and projection compare products by key, never by value, so a
/// product is the same product in every view derived from it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
