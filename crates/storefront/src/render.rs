//! Text and JSON rendering of a product section.
//!
//! Renderers only format what the catalog crate prepared; they make no
//! display decisions of their own beyond layout.

use std::io::{self, Write};

use serde::Serialize;

use storefront_catalog::{
    BrandTag, CardView, FEATURES_FALLBACK, Features, MAX_STARS, PriceDisplay, ProductSection,
    RatingStars, ResolvedPreview, SectionEvent,
};
use storefront_events::EventSink;

/// Serializable snapshot of what the section shows.
#[derive(Debug, Serialize)]
pub struct SectionView<'s, 'a> {
    pub title: &'s str,
    pub active_brand: &'s BrandTag,
    pub brands: &'s [BrandTag],
    pub has_more_brands: bool,
    pub cards: Vec<CardView<'a>>,
}

impl<'s, 'a> SectionView<'s, 'a> {
    pub fn of<S>(section: &'s ProductSection<'a, S>) -> Self
    where
        S: EventSink<SectionEvent>,
    {
        Self {
            title: section.title(),
            active_brand: section.state().active_brand(),
            brands: section.visible_brand_tags(),
            has_more_brands: section.has_more_brands(),
            cards: section.grid(),
        }
    }
}

pub fn stars(rating: &RatingStars) -> String {
    let mut row = String::with_capacity(usize::from(MAX_STARS) * 3);
    row.extend(std::iter::repeat_n('★', usize::from(rating.filled)));
    row.extend(std::iter::repeat_n('☆', usize::from(rating.empty())));
    row
}

pub fn price(display: &PriceDisplay) -> String {
    match display.original {
        Some(original) => format!("${:.2}  (was ${:.2})", display.current, original),
        None => format!("${:.2}", display.current),
    }
}

fn badges(card_new: bool, discount: Option<String>) -> String {
    let mut parts = Vec::new();
    if card_new {
        parts.push("[New]".to_string());
    }
    if let Some(label) = discount {
        parts.push(format!("[{label}]"));
    }
    parts.join(" ")
}

pub fn render_section<W, S>(out: &mut W, section: &ProductSection<'_, S>) -> io::Result<()>
where
    W: Write,
    S: EventSink<SectionEvent>,
{
    let view = SectionView::of(section);

    writeln!(out, "{}", view.title)?;
    writeln!(out, "{}", "=".repeat(view.title.chars().count()))?;

    let mut tabs: Vec<String> = view
        .brands
        .iter()
        .map(|tag| {
            if tag == view.active_brand {
                format!("[{tag}]")
            } else {
                tag.to_string()
            }
        })
        .collect();
    if view.has_more_brands {
        tabs.push("More +".to_string());
    }
    writeln!(out, "Brands: {}", tabs.join("  "))?;
    writeln!(out)?;

    if view.cards.is_empty() {
        writeln!(out, "No products for brand \"{}\".", view.active_brand)?;
    }
    for card in &view.cards {
        render_card(out, card)?;
    }

    writeln!(out, "View More Products >")?;
    Ok(())
}

pub fn render_card<W: Write>(out: &mut W, card: &CardView<'_>) -> io::Result<()> {
    let tags = badges(card.badges.is_new, card.badges.discount_label());
    if tags.is_empty() {
        writeln!(out, "#{} {}", card.product_id, card.name)?;
    } else {
        writeln!(out, "#{} {}  {}", card.product_id, card.name, tags)?;
    }
    if !card.specs.is_empty() {
        writeln!(out, "    {}", card.specs)?;
    }
    writeln!(out, "    {} {}", stars(&card.rating), card.rating.label())?;
    writeln!(out, "    {}", price(&card.price))?;
    writeln!(out, "    image: {}", card.image)?;
    writeln!(out)?;
    Ok(())
}

pub fn render_preview<W: Write>(out: &mut W, preview: &ResolvedPreview<'_>) -> io::Result<()> {
    let tags = badges(preview.badges.is_new, preview.badges.discount_label());
    if tags.is_empty() {
        writeln!(out, "{}", preview.name)?;
    } else {
        writeln!(out, "{}  {}", preview.name, tags)?;
    }
    if !preview.specs.is_empty() {
        writeln!(out, "{}", preview.specs)?;
    }
    writeln!(out, "image: {}", preview.image)?;
    writeln!(out)?;

    writeln!(out, "Details")?;
    writeln!(out, "  {}", preview.description)?;
    writeln!(out, "  Availability: {}", preview.availability.label())?;
    if let Some(colors) = preview.color_swatches {
        writeln!(out, "  Available Colors: {}", colors.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "Features")?;
    match preview.features {
        Features::Listed(items) => {
            for item in items {
                writeln!(out, "  - {item}")?;
            }
        }
        Features::Unavailable => writeln!(out, "  {FEATURES_FALLBACK}")?,
    }
    writeln!(out)?;

    writeln!(out, "{}", price(&preview.price))?;
    writeln!(out, "{} {}", stars(&preview.rating), preview.rating.label())?;
    writeln!(out, "Add to Cart: storefront cart {}", preview.product_id)?;
    Ok(())
}

pub fn render_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
