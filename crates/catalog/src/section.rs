//! Product section: one display session over a product list.
//!
//! A [`ProductSection`] owns the [`SelectionState`] for a rendered section and
//! derives everything the rendering surface asks for from it:
//!
//! - brand tabs (collapsed to `brand_limit` until the user expands them)
//! - the brand-filtered product list and the card grid built from it
//! - the resolved quick-preview, when one is open
//!
//! The product list is borrowed for the whole session and never changes, so
//! brand tags are computed once up front. Projections borrow from the product
//! list rather than from the section, so they outlive later state changes.
//!
//! Outward actions (view more, add to cart) are published to the session's
//! [`EventSink`] wrapped in an [`EventEnvelope`]. Publishing is fire-and-forget:
//! a failed delivery is logged and never reported to the caller.

use chrono::Utc;
use uuid::Uuid;

use storefront_core::{ProductId, SessionId};
use storefront_events::{EventEnvelope, EventSink};

use crate::brand::{BrandTag, BrandTags, DEFAULT_BRAND_LIMIT};
use crate::card::{CardView, DEFAULT_GRID_LIMIT, project_card};
use crate::events::{AddToCartRequested, CatalogEvent, ViewMoreRequested};
use crate::preview::{ResolvedPreview, resolve_preview};
use crate::product::ProductSummary;
use crate::selection::{SelectionAction, SelectionState};
use crate::selector::filter_by_brand;

/// Default section heading.
pub const DEFAULT_SECTION_TITLE: &str = "Featured Products";

/// Presentation knobs for a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionConfig {
    pub title: String,
    /// Brand tabs shown before "more" (including "all").
    pub brand_limit: usize,
    /// Cards shown in the grid.
    pub grid_limit: usize,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_SECTION_TITLE.to_string(),
            brand_limit: DEFAULT_BRAND_LIMIT,
            grid_limit: DEFAULT_GRID_LIMIT,
        }
    }
}

/// Envelope type published by a section.
pub type SectionEvent = EventEnvelope<CatalogEvent>;

#[derive(Debug)]
pub struct ProductSection<'a, S> {
    session_id: SessionId,
    config: SectionConfig,
    products: &'a [ProductSummary],
    brand_tags: BrandTags,
    state: SelectionState,
    sink: S,
    next_sequence: u64,
}

impl<'a, S> ProductSection<'a, S>
where
    S: EventSink<SectionEvent>,
{
    pub fn new(products: &'a [ProductSummary], sink: S) -> Self {
        Self::with_config(products, SectionConfig::default(), sink)
    }

    pub fn with_config(products: &'a [ProductSummary], config: SectionConfig, sink: S) -> Self {
        let brand_tags = BrandTags::extract(products);
        let session_id = SessionId::new();
        tracing::debug!(
            session_id = %session_id,
            products = products.len(),
            brands = brand_tags.len(),
            "product section opened"
        );

        Self {
            session_id,
            config,
            products,
            brand_tags,
            state: SelectionState::default(),
            sink,
            next_sequence: 1,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn products(&self) -> &'a [ProductSummary] {
        self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&'a ProductSummary> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn brand_tags(&self) -> &BrandTags {
        &self.brand_tags
    }

    pub fn visible_brand_tags(&self) -> &[BrandTag] {
        self.brand_tags
            .visible(self.state.show_all_brands(), self.config.brand_limit)
    }

    pub fn has_more_brands(&self) -> bool {
        self.brand_tags
            .has_more(self.state.show_all_brands(), self.config.brand_limit)
    }

    /// Apply a selection action. Returns whether the state changed.
    ///
    /// Opening a preview for an id that is not in the product list is ignored.
    pub fn dispatch(&mut self, action: SelectionAction) -> bool {
        if let SelectionAction::OpenPreview(id) = &action {
            if self.product(*id).is_none() {
                tracing::debug!(session_id = %self.session_id, product_id = %id, "preview requested for unknown product");
                return false;
            }
        }

        tracing::debug!(session_id = %self.session_id, ?action, "selection action");
        self.state.apply(action)
    }

    /// Switch the active brand tab. Tags outside the brand set are allowed
    /// and simply match nothing.
    pub fn select_brand(&mut self, tag: impl Into<BrandTag>) -> bool {
        self.dispatch(SelectionAction::SelectBrand(tag.into()))
    }

    pub fn show_all_brands(&mut self) -> bool {
        self.dispatch(SelectionAction::ShowAllBrands)
    }

    /// Open the quick-preview for `id` and return it, or `None` for an unknown id.
    pub fn open_preview(&mut self, id: ProductId) -> Option<ResolvedPreview<'a>> {
        self.dispatch(SelectionAction::OpenPreview(id));
        self.product(id).map(resolve_preview)
    }

    pub fn close_preview(&mut self) -> bool {
        self.dispatch(SelectionAction::ClosePreview)
    }

    /// Products matching the active brand, in supplier order.
    pub fn filtered(&self) -> Vec<&'a ProductSummary> {
        filter_by_brand(self.products, self.state.active_brand())
    }

    /// Cards for the first `grid_limit` filtered products.
    pub fn grid(&self) -> Vec<CardView<'a>> {
        self.filtered()
            .into_iter()
            .take(self.config.grid_limit)
            .map(project_card)
            .collect()
    }

    pub fn preview(&self) -> Option<ResolvedPreview<'a>> {
        let id = self.state.previewed()?;
        self.product(id).map(resolve_preview)
    }

    pub fn view_more(&mut self) {
        self.emit(CatalogEvent::ViewMoreRequested(ViewMoreRequested {
            occurred_at: Utc::now(),
        }));
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) {
        self.emit(CatalogEvent::AddToCartRequested(AddToCartRequested {
            product_id,
            occurred_at: Utc::now(),
        }));
    }

    fn emit(&mut self, event: CatalogEvent) {
        let sequence_number = self.next_sequence;
        self.next_sequence += 1;

        let envelope = EventEnvelope::new(Uuid::now_v7(), self.session_id, sequence_number, event);
        if let Err(err) = self.sink.publish(envelope) {
            tracing::warn!(
                session_id = %self.session_id,
                sequence_number,
                error = ?err,
                "failed to publish section event"
            );
        }
    }
}
