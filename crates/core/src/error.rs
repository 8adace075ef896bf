//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures at the edges of the catalog.
///
/// Brand selection and preview resolution never fail. These variants come from
/// ingesting supplier data or from identifiers a user typed in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A product record broke the supplier contract (negative price, rating above 5).
    #[error("invalid product data: {0}")]
    Validation(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Two records claim the same product id.
    #[error("conflicting records: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }
}
