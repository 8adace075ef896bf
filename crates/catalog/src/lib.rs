//! Storefront catalog: brand filtering and display projections.
//!
//! Everything here is deterministic and free of IO apart from the supplier
//! boundary, which decodes a JSON product list. Rendering belongs to the
//! caller; this crate hands it prepared display data.

pub mod brand;
pub mod card;
pub mod events;
pub mod preview;
pub mod pricing;
pub mod product;
pub mod section;
pub mod selection;
pub mod selector;
pub mod supplier;

pub use brand::{
    ALL_BRANDS, BrandTag, BrandTags, DEFAULT_BRAND_LIMIT, extract_brand_tags, visible_brand_tags,
};
pub use card::{CardView, DEFAULT_GRID_LIMIT, project_card};
pub use events::{AddToCartRequested, CatalogEvent, ViewMoreRequested};
pub use preview::{
    Availability, DESCRIPTION_FALLBACK, FEATURES_FALLBACK, Features, PLACEHOLDER_IMAGE,
    ResolvedPreview, SWATCH_CATEGORY, resolve_preview,
};
pub use pricing::{Badges, MAX_STARS, PriceDisplay, RatingStars, original_price};
pub use product::ProductSummary;
pub use section::{DEFAULT_SECTION_TITLE, ProductSection, SectionConfig, SectionEvent};
pub use selection::{SelectionAction, SelectionState};
pub use selector::filter_by_brand;
pub use supplier::{SupplyError, parse_catalog, read_catalog, validate_catalog};
