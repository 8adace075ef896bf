//! Quick-preview projection.
//!
//! [`resolve_preview`] turns a [`ProductSummary`] into the data a detail view
//! needs. It is a read-only projection: it borrows from the product and never
//! mutates it, and every optional field resolves to a fallback instead of an
//! error.

use serde::Serialize;

use storefront_core::{ProductId, ValueObject};

use crate::pricing::{Badges, PriceDisplay, RatingStars};
use crate::product::ProductSummary;

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Description shown when a product has none.
pub const DESCRIPTION_FALLBACK: &str = "No detailed description available for this product.";

/// Text a renderer shows for [`Features::Unavailable`].
pub const FEATURES_FALLBACK: &str = "No feature details available for this product.";

/// The only category whose previews show color swatches.
pub const SWATCH_CATEGORY: &str = "EarBuds";

/// Stock status; there is no partial-stock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    OutOfStock,
}

impl Availability {
    pub fn from_flag(in_stock: bool) -> Self {
        if in_stock {
            Availability::InStock
        } else {
            Availability::OutOfStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::InStock => "In Stock",
            Availability::OutOfStock => "Out of Stock",
        }
    }
}

/// Feature bullet list, or a marker that there is nothing to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Features<'a> {
    Listed(&'a [String]),
    Unavailable,
}

impl<'a> Features<'a> {
    pub fn from_list(features: &'a [String]) -> Self {
        if features.is_empty() {
            Features::Unavailable
        } else {
            Features::Listed(features)
        }
    }

    pub fn items(&self) -> &'a [String] {
        match self {
            Features::Listed(items) => items,
            Features::Unavailable => &[],
        }
    }
}

/// Everything the detail view renders for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPreview<'a> {
    pub product_id: ProductId,
    pub name: &'a str,
    pub specs: &'a str,
    pub image: &'a str,
    pub description: &'a str,
    pub features: Features<'a>,
    pub availability: Availability,
    pub price: PriceDisplay,
    pub rating: RatingStars,
    pub badges: Badges,
    /// `Some` only for [`SWATCH_CATEGORY`] products with at least one color.
    pub color_swatches: Option<&'a [String]>,
}

impl ValueObject for ResolvedPreview<'_> {}

/// Product image, or [`PLACEHOLDER_IMAGE`] when empty.
pub fn image_or_placeholder(image: &str) -> &str {
    if image.is_empty() { PLACEHOLDER_IMAGE } else { image }
}

fn color_swatches(product: &ProductSummary) -> Option<&[String]> {
    (product.category == SWATCH_CATEGORY && !product.colors.is_empty())
        .then_some(product.colors.as_slice())
}

/// Project a product into its quick-preview data.
pub fn resolve_preview(product: &ProductSummary) -> ResolvedPreview<'_> {
    let description = if product.description.is_empty() {
        DESCRIPTION_FALLBACK
    } else {
        product.description.as_str()
    };

    ResolvedPreview {
        product_id: product.id,
        name: &product.name,
        specs: &product.specs,
        image: image_or_placeholder(&product.image),
        description,
        features: Features::from_list(&product.features),
        availability: Availability::from_flag(product.in_stock),
        price: PriceDisplay::for_product(product),
        rating: RatingStars::from_rating(product.rating),
        badges: Badges::for_product(product),
        color_swatches: color_swatches(product),
    }
}
