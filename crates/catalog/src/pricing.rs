//! Price, discount and rating figures shared by cards and previews.

use serde::Serialize;

use storefront_core::ValueObject;

use crate::product::ProductSummary;

/// Number of stars in a rating row.
pub const MAX_STARS: u8 = 5;

/// Round to two decimal places (cents).
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pre-discount price for display, or `None` when there is no discount.
///
/// `price * (1 + discount / 100)`, rounded to cents.
pub fn original_price(price: f64, discount: u32) -> Option<f64> {
    (discount > 0).then(|| round_to_cents(price * (1.0 + f64::from(discount) / 100.0)))
}

/// Current price (as supplied, unrounded) and the struck-through original.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceDisplay {
    pub current: f64,
    pub original: Option<f64>,
}

impl PriceDisplay {
    pub fn for_product(product: &ProductSummary) -> Self {
        Self {
            current: product.price,
            original: original_price(product.price, product.discount),
        }
    }

    pub fn is_discounted(&self) -> bool {
        self.original.is_some()
    }
}

impl ValueObject for PriceDisplay {}

/// Corner badges on a card or preview image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badges {
    pub is_new: bool,
    /// Set only when the discount is greater than zero.
    pub discount_percent: Option<u32>,
}

impl Badges {
    pub fn for_product(product: &ProductSummary) -> Self {
        Self {
            is_new: product.is_new,
            discount_percent: product.is_discounted().then_some(product.discount),
        }
    }

    pub fn discount_label(&self) -> Option<String> {
        self.discount_percent.map(|d| format!("{d}% Off"))
    }
}

impl ValueObject for Badges {}

/// Star row: `floor(rating)` filled stars out of [`MAX_STARS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingStars {
    pub value: f64,
    pub filled: u8,
}

impl RatingStars {
    pub fn from_rating(rating: f64) -> Self {
        // `as` saturates, so NaN and negatives land on 0.
        let filled = (rating.floor() as u8).min(MAX_STARS);
        Self {
            value: rating,
            filled,
        }
    }

    pub fn empty(&self) -> u8 {
        MAX_STARS - self.filled
    }

    /// Rating with one decimal, e.g. "4.5".
    pub fn label(&self) -> String {
        format!("{:.1}", self.value)
    }
}

impl ValueObject for RatingStars {}
