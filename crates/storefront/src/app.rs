//! Page shell: load the catalog, open a section, and run one user action.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::Context;

use storefront_catalog::{ProductSection, ProductSummary, SectionEvent, parse_catalog, read_catalog};
use storefront_core::{DomainError, ProductId};
use storefront_events::EventSink;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::render;

/// Catalog used when no file is configured.
pub const DEMO_CATALOG: &str = include_str!("../data/catalog.json");

pub fn load_products(path: Option<&Path>) -> anyhow::Result<Vec<ProductSummary>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open catalog {}", path.display()))?;
            let products = read_catalog(BufReader::new(file))
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            tracing::info!(path = %path.display(), count = products.len(), "catalog loaded");
            Ok(products)
        }
        None => {
            let products = parse_catalog(DEMO_CATALOG).context("bundled demo catalog is invalid")?;
            tracing::info!(count = products.len(), "using bundled demo catalog");
            Ok(products)
        }
    }
}

/// Execute the parsed command against a fresh section and write its output.
pub fn run<W, S>(cli: &Cli, config: &Config, sink: S, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
    S: EventSink<SectionEvent>,
{
    let catalog_path = cli.catalog.as_deref().or(config.catalog_path.as_deref());
    let products = load_products(catalog_path)?;
    let mut section = ProductSection::with_config(&products, config.section_config(), sink);

    match &cli.command {
        Commands::Show { brand, all_brands } => {
            if let Some(brand) = brand {
                section.select_brand(brand.as_str());
            }
            if *all_brands {
                section.show_all_brands();
            }

            if cli.json {
                render::render_json(out, &render::SectionView::of(&section))?;
            } else {
                render::render_section(out, &section)?;
            }
        }
        Commands::Preview { id } => {
            let preview = section
                .open_preview(*id)
                .ok_or(DomainError::not_found(*id))?;

            if cli.json {
                render::render_json(out, &preview)?;
            } else {
                render::render_preview(out, &preview)?;
            }
        }
        Commands::Cart { id } => {
            let product = require_product(&section, *id)?;
            section.add_to_cart(*id);
            writeln!(out, "Added {} to your cart", product.name)?;
        }
        Commands::More => {
            section.view_more();
            writeln!(out, "Requested more products")?;
        }
    }

    Ok(())
}

fn require_product<'a, S>(section: &ProductSection<'a, S>, id: ProductId) -> anyhow::Result<&'a ProductSummary>
where
    S: EventSink<SectionEvent>,
{
    section
        .product(id)
        .ok_or_else(|| DomainError::not_found(id).into())
}
