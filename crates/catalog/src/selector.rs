//! Brand filtering over the supplied product list.

use crate::brand::BrandTag;
use crate::product::ProductSummary;

/// Products whose brand list contains `active`, in input order.
///
/// The "all" tag returns every product unchanged; an empty tag matches
/// nothing. The result borrows from `products`; nothing is copied.
pub fn filter_by_brand<'a>(products: &'a [ProductSummary], active: &BrandTag) -> Vec<&'a ProductSummary> {
    if active.is_all() {
        return products.iter().collect();
    }
    if active.is_empty() {
        return Vec::new();
    }
    products.iter().filter(|p| p.has_brand(active)).collect()
}
