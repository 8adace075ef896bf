//! Product supplier boundary: decode a JSON catalog and check its contract.
//!
//! The selector and projections assume well-formed records. This is the one
//! place that checks: unique ids, finite non-negative prices, ratings within
//! `0.0..=5.0`. Brand shape is normalized by deserialization.

use std::collections::HashSet;
use std::io::Read;

use thiserror::Error;

use storefront_core::{DomainError, DomainResult, ProductId};

use crate::product::ProductSummary;

/// Highest rating a product may carry.
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("failed to decode product catalog: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("product catalog rejected: {0}")]
    Contract(#[from] DomainError),
}

/// Decode a JSON array of products and validate it.
pub fn parse_catalog(json: &str) -> Result<Vec<ProductSummary>, SupplyError> {
    let products: Vec<ProductSummary> = serde_json::from_str(json)?;
    validate_catalog(&products)?;
    tracing::debug!(count = products.len(), "decoded product catalog");
    Ok(products)
}

/// Same as [`parse_catalog`], reading from any byte source.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<ProductSummary>, SupplyError> {
    let products: Vec<ProductSummary> = serde_json::from_reader(reader)?;
    validate_catalog(&products)?;
    tracing::debug!(count = products.len(), "read product catalog");
    Ok(products)
}

/// Check the supplier contract over a whole catalog.
pub fn validate_catalog(products: &[ProductSummary]) -> DomainResult<()> {
    let mut seen: HashSet<ProductId> = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id) {
            return Err(DomainError::conflict(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        validate_product(product)?;
    }
    Ok(())
}

fn validate_product(product: &ProductSummary) -> DomainResult<()> {
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(DomainError::validation(format!(
            "product {}: price must be a non-negative number (got {})",
            product.id, product.price
        )));
    }

    if !(0.0..=MAX_RATING).contains(&product.rating) {
        return Err(DomainError::validation(format!(
            "product {}: rating must be within 0.0..=5.0 (got {})",
            product.id, product.rating
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::BrandTag;

    #[test]
    fn parses_mixed_brand_shapes() {
        let json = r#"[
            {"productId": 1, "name": "One", "price": 10, "brand": "Acme"},
            {"productId": 2, "name": "Two", "price": 20, "brand": ["Zenith", "Acme"]},
            {"productId": 3, "name": "Three", "price": 30}
        ]"#;

        let products = parse_catalog(json).unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].brands, vec![BrandTag::new("Acme")]);
        assert_eq!(products[1].brands.len(), 2);
        assert!(products[2].brands.is_empty());
    }

    #[test]
    fn empty_catalog_is_valid() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = parse_catalog(r#"[{"productId": "x"}]"#).unwrap_err();
        match err {
            SupplyError::Decode(_) => {}
            _ => panic!("Expected Decode error"),
        }
    }

    #[test]
    fn duplicate_ids_conflict() {
        let json = r#"[
            {"productId": 1, "name": "One", "price": 10},
            {"productId": 1, "name": "Again", "price": 11}
        ]"#;
        let err = parse_catalog(json).unwrap_err();
        match err {
            SupplyError::Contract(DomainError::Conflict(msg)) => assert!(msg.contains("1")),
            _ => panic!("Expected Conflict error for duplicate id"),
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = parse_catalog(r#"[{"productId": 1, "name": "One", "price": -1}]"#).unwrap_err();
        match err {
            SupplyError::Contract(DomainError::Validation(msg)) => assert!(msg.contains("price")),
            _ => panic!("Expected Validation error for negative price"),
        }
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let products = vec![ProductSummary::new(1u64, "One", 1.0).with_rating(5.5)];
        match validate_catalog(&products).unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("rating")),
            _ => panic!("Expected Validation error for rating"),
        }
    }

    #[test]
    fn boundary_ratings_are_accepted() {
        let products = vec![
            ProductSummary::new(1u64, "Low", 1.0).with_rating(0.0),
            ProductSummary::new(2u64, "High", 1.0).with_rating(5.0),
        ];
        assert!(validate_catalog(&products).is_ok());
    }

    #[test]
    fn reads_from_a_byte_source() {
        let bytes = br#"[{"productId": 4, "name": "Four", "price": 4.5}]"#;
        let products = read_catalog(&bytes[..]).unwrap();
        assert_eq!(products[0].id, ProductId::new(4));
    }
}
