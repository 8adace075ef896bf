//! Events a product section emits toward the cart and navigation subsystems.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::ProductId;
use storefront_events::Event;

/// Event: the user asked to see more products than the section shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewMoreRequested {
    pub occurred_at: DateTime<Utc>,
}

/// Event: the user asked to add a product to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartRequested {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    ViewMoreRequested(ViewMoreRequested),
    AddToCartRequested(AddToCartRequested),
}

impl Event for CatalogEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::ViewMoreRequested(_) => "catalog.view_more.requested",
            CatalogEvent::AddToCartRequested(_) => "catalog.cart.add_requested",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CatalogEvent::ViewMoreRequested(e) => e.occurred_at,
            CatalogEvent::AddToCartRequested(e) => e.occurred_at,
        }
    }
}
