//! Brand tags and the brand tab strip.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::product::ProductSummary;

/// Reserved tag meaning "no brand filter".
pub const ALL_BRANDS: &str = "all";

/// Number of brand tabs shown before the "more" affordance appears.
pub const DEFAULT_BRAND_LIMIT: usize = 5;

/// Case-sensitive brand key, exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandTag(String);

impl BrandTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The synthetic "all" tag.
    pub fn all() -> Self {
        Self(ALL_BRANDS.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_BRANDS
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BrandTag {
    fn default() -> Self {
        Self::all()
    }
}

impl core::fmt::Display for BrandTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BrandTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BrandTag {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BrandTag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for BrandTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BrandTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered, duplicate-free set of brand tags with "all" always first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BrandTags {
    tags: Vec<BrandTag>,
}

impl BrandTags {
    /// Collect distinct non-empty brands in first-seen order, behind "all".
    pub fn extract<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a ProductSummary>,
    {
        let mut tags = vec![BrandTag::all()];
        let mut seen: HashSet<String> = HashSet::from([ALL_BRANDS.to_string()]);

        for brand in products.into_iter().flat_map(|p| p.brands.iter()) {
            if brand.is_empty() || seen.contains(brand.as_str()) {
                continue;
            }
            seen.insert(brand.as_str().to_string());
            tags.push(brand.clone());
        }

        Self { tags }
    }

    pub fn as_slice(&self) -> &[BrandTag] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &BrandTag> {
        self.tags.iter()
    }

    /// Always at least 1 ("all").
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &BrandTag) -> bool {
        self.tags.contains(tag)
    }

    /// Tabs to render: the first `limit` unless everything was requested.
    pub fn visible(&self, show_all: bool, limit: usize) -> &[BrandTag] {
        if !show_all && self.tags.len() > limit {
            &self.tags[..limit]
        } else {
            &self.tags
        }
    }

    /// Whether the "more" affordance should be offered.
    pub fn has_more(&self, show_all: bool, limit: usize) -> bool {
        !show_all && self.tags.len() > limit
    }
}

impl<'a> IntoIterator for &'a BrandTags {
    type Item = &'a BrandTag;
    type IntoIter = core::slice::Iter<'a, BrandTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Distinct brand tags across `products`, "all" first.
pub fn extract_brand_tags(products: &[ProductSummary]) -> BrandTags {
    BrandTags::extract(products)
}

/// Brand tabs to render for the given show-all state.
pub fn visible_brand_tags(all: &BrandTags, show_all: bool, limit: usize) -> &[BrandTag] {
    all.visible(show_all, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, brands: &[&str]) -> ProductSummary {
        ProductSummary::new(id, format!("Product {id}"), 10.0).with_brands(brands.iter().copied())
    }

    fn tags(values: &[&str]) -> Vec<BrandTag> {
        values.iter().map(|v| BrandTag::new(*v)).collect()
    }

    #[test]
    fn empty_catalog_yields_only_all() {
        let extracted = extract_brand_tags(&[]);
        assert_eq!(extracted.as_slice(), tags(&["all"]).as_slice());
    }

    #[test]
    fn brands_keep_first_seen_order_behind_all() {
        let products = vec![product(1, &["Acme"]), product(2, &["Zenith"])];
        let extracted = extract_brand_tags(&products);
        assert_eq!(extracted.as_slice(), tags(&["all", "Acme", "Zenith"]).as_slice());
    }

    #[test]
    fn duplicates_and_empty_entries_are_skipped() {
        let products = vec![
            product(1, &["Acme", "", "Zenith"]),
            product(2, &["Zenith", "Acme", "Orbit"]),
            product(3, &[]),
        ];
        let extracted = extract_brand_tags(&products);
        assert_eq!(extracted.as_slice(), tags(&["all", "Acme", "Zenith", "Orbit"]).as_slice());
    }

    #[test]
    fn literal_all_in_product_data_does_not_duplicate_the_synthetic_tag() {
        let products = vec![product(1, &["all", "Acme"])];
        let extracted = extract_brand_tags(&products);
        assert_eq!(extracted.as_slice(), tags(&["all", "Acme"]).as_slice());
    }

    #[test]
    fn brand_tags_are_case_sensitive() {
        let products = vec![product(1, &["acme"]), product(2, &["Acme"])];
        let extracted = extract_brand_tags(&products);
        assert_eq!(extracted.len(), 3);
    }

    #[test]
    fn seven_brands_truncate_to_the_limit_until_show_all() {
        let products: Vec<_> = ["A", "B", "C", "D", "E", "F", "G"]
            .iter()
            .enumerate()
            .map(|(i, b)| product(i as u64, &[*b]))
            .collect();
        let extracted = extract_brand_tags(&products);
        assert_eq!(extracted.len(), 8);

        let collapsed = visible_brand_tags(&extracted, false, DEFAULT_BRAND_LIMIT);
        assert_eq!(collapsed, tags(&["all", "A", "B", "C", "D"]).as_slice());
        assert!(extracted.has_more(false, DEFAULT_BRAND_LIMIT));

        let expanded = visible_brand_tags(&extracted, true, DEFAULT_BRAND_LIMIT);
        assert_eq!(expanded, extracted.as_slice());
        assert!(!extracted.has_more(true, DEFAULT_BRAND_LIMIT));
    }

    #[test]
    fn no_more_affordance_at_exactly_the_limit() {
        let products: Vec<_> = ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, b)| product(i as u64, &[*b]))
            .collect();
        let extracted = extract_brand_tags(&products);
        assert_eq!(extracted.len(), DEFAULT_BRAND_LIMIT);
        assert!(!extracted.has_more(false, DEFAULT_BRAND_LIMIT));
        assert_eq!(extracted.visible(false, DEFAULT_BRAND_LIMIT).len(), DEFAULT_BRAND_LIMIT);
    }

    #[test]
    fn default_tag_is_all() {
        assert!(BrandTag::default().is_all());
        assert_eq!(BrandTag::all(), "all");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn catalog() -> impl Strategy<Value = Vec<ProductSummary>> {
            prop::collection::vec(prop::collection::vec("[A-Za-z]{0,4}", 0..4), 0..12).prop_map(
                |brand_lists| {
                    brand_lists
                        .into_iter()
                        .enumerate()
                        .map(|(i, brands)| {
                            ProductSummary::new(i as u64, "p", 1.0).with_brands(brands)
                        })
                        .collect()
                },
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: "all" leads and no tag appears twice.
            #[test]
            fn all_first_and_no_duplicates(products in catalog()) {
                let extracted = extract_brand_tags(&products);
                prop_assert!(extracted.as_slice()[0].is_all());

                let unique: HashSet<&BrandTag> = extracted.iter().collect();
                prop_assert_eq!(unique.len(), extracted.len());
                prop_assert!(extracted.iter().all(|t| !t.is_empty()));
            }

            /// Property: every non-empty product brand is represented.
            #[test]
            fn every_brand_is_represented(products in catalog()) {
                let extracted = extract_brand_tags(&products);
                for brand in products.iter().flat_map(|p| p.brands.iter()) {
                    prop_assert!(brand.is_empty() || extracted.contains(brand));
                }
            }

            /// Property: collapsed tabs never exceed the limit; expanded tabs are the full set.
            #[test]
            fn visible_tags_respect_limit(products in catalog(), limit in 1usize..8) {
                let extracted = extract_brand_tags(&products);

                let collapsed = extracted.visible(false, limit);
                prop_assert!(collapsed.len() <= limit);
                prop_assert_eq!(collapsed, &extracted.as_slice()[..collapsed.len()]);

                prop_assert_eq!(extracted.visible(true, limit), extracted.as_slice());
                prop_assert_eq!(
                    extracted.has_more(false, limit),
                    extracted.len() > limit
                );
            }
        }
    }
}
