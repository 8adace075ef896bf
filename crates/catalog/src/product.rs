use serde::{Deserialize, Deserializer, Serialize};

use storefront_core::{Entity, ProductId};

use crate::brand::BrandTag;

/// Read-only product record as furnished by the product supplier.
///
/// Field names on the wire follow the storefront's JSON shape (`productId`,
/// `inStock`, `isNew`, ...). Absent strings and collections default to empty,
/// which the preview and card projections turn into fallback values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    #[serde(rename = "productId")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub specs: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub is_new: bool,
    /// Discount percentage; 0 means no discount.
    #[serde(default)]
    pub discount: u32,
    #[serde(default)]
    pub colors: Vec<String>,
    /// Suppliers send either a single brand or a list; both land here as a
    /// list with null and empty entries dropped.
    #[serde(rename = "brand", default, deserialize_with = "deserialize_brands")]
    pub brands: Vec<BrandTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_left: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hype: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ProductSummary {
    /// Minimal record; everything optional is empty.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            price,
            rating: 0.0,
            specs: String::new(),
            category: String::new(),
            in_stock: false,
            is_new: false,
            discount: 0,
            colors: Vec::new(),
            brands: Vec::new(),
            days_left: None,
            hype: None,
            description: String::new(),
            features: Vec::new(),
        }
    }

    pub fn with_brands<I, B>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<BrandTag>,
    {
        self.brands = brands
            .into_iter()
            .map(Into::into)
            .filter(|b: &BrandTag| !b.is_empty())
            .collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_colors<I, C>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_discount(mut self, percent: u32) -> Self {
        self.discount = percent;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Exact, case-sensitive membership test against the brand list.
    pub fn has_brand(&self, tag: &BrandTag) -> bool {
        self.brands.iter().any(|b| b == tag)
    }

    pub fn is_discounted(&self) -> bool {
        self.discount > 0
    }
}

impl Entity for ProductSummary {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BrandField {
    One(String),
    Many(Vec<Option<String>>),
}

fn deserialize_brands<'de, D>(deserializer: D) -> Result<Vec<BrandTag>, D::Error>
where
    D: Deserializer<'de>,
{
    let brands = match Option::<BrandField>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(BrandField::One(brand)) => vec![brand],
        Some(BrandField::Many(brands)) => brands.into_iter().flatten().collect(),
    };
    Ok(brands
        .into_iter()
        .filter(|b| !b.is_empty())
        .map(BrandTag::new)
        .collect())
}
