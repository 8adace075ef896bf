//! UI-scoped selection state for one display session.

use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

use crate::brand::BrandTag;

/// A user action that changes what the section shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum SelectionAction {
    SelectBrand(BrandTag),
    ShowAllBrands,
    OpenPreview(ProductId),
    ClosePreview,
}

/// Active brand tab, brand-strip expansion, and the previewed product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    active_brand: BrandTag,
    show_all_brands: bool,
    previewed: Option<ProductId>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            active_brand: BrandTag::all(),
            show_all_brands: false,
            previewed: None,
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_brand(&self) -> &BrandTag {
        &self.active_brand
    }

    pub fn show_all_brands(&self) -> bool {
        self.show_all_brands
    }

    pub fn previewed(&self) -> Option<ProductId> {
        self.previewed
    }

    /// Apply one action. Returns whether anything changed.
    pub fn apply(&mut self, action: SelectionAction) -> bool {
        match action {
            SelectionAction::SelectBrand(tag) => {
                if self.active_brand == tag {
                    return false;
                }
                self.active_brand = tag;
            }
            SelectionAction::ShowAllBrands => {
                if self.show_all_brands {
                    return false;
                }
                self.show_all_brands = true;
            }
            SelectionAction::OpenPreview(id) => {
                if self.previewed == Some(id) {
                    return false;
                }
                self.previewed = Some(id);
            }
            SelectionAction::ClosePreview => {
                if self.previewed.is_none() {
                    return false;
                }
                self.previewed = None;
            }
        }
        true
    }
}
