//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Display projections (cards, previews, price figures) are value objects: they
/// carry no identity of their own and two projections with the same fields are
/// interchangeable. Contrast with [`crate::Entity`], which is keyed by id.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceDisplay {
///     current: f64,
///     original: Option<f64>,
/// }
///
/// impl ValueObject for PriceDisplay {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
