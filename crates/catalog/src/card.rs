//! Grid card projection.

use serde::Serialize;

use storefront_core::{ProductId, ValueObject};

use crate::preview::image_or_placeholder;
use crate::pricing::{Badges, PriceDisplay, RatingStars};
use crate::product::ProductSummary;

/// Number of cards shown in a product section grid.
pub const DEFAULT_GRID_LIMIT: usize = 6;

/// Grid card display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView<'a> {
    pub product_id: ProductId,
    pub name: &'a str,
    pub image: &'a str,
    pub specs: &'a str,
    pub badges: Badges,
    pub rating: RatingStars,
    pub price: PriceDisplay,
}

impl ValueObject for CardView<'_> {}

pub fn project_card(product: &ProductSummary) -> CardView<'_> {
    CardView {
        product_id: product.id,
        name: &product.name,
        image: image_or_placeholder(&product.image),
        specs: &product.specs,
        badges: Badges::for_product(product),
        rating: RatingStars::from_rating(product.rating),
        price: PriceDisplay::for_product(product),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PLACEHOLDER_IMAGE;

    #[test]
    fn card_carries_badges_stars_and_prices() {
        let mut product = ProductSummary::new(11u64, "Volt Mouse", 100.0)
            .with_discount(20)
            .with_rating(3.9);
        product.is_new = true;
        product.specs = "16k DPI".to_string();

        let card = project_card(&product);
        assert_eq!(card.product_id, ProductId::new(11));
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.specs, "16k DPI");
        assert!(card.badges.is_new);
        assert_eq!(card.badges.discount_label().as_deref(), Some("20% Off"));
        assert_eq!(card.rating.filled, 3);
        assert_eq!(card.rating.label(), "3.9");
        assert_eq!(card.price.original, Some(120.0));
    }
}
