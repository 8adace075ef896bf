use clap::{Parser, Subcommand};
use std::path::PathBuf;

use storefront_core::ProductId;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse a storefront product section from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Product catalog (JSON array). Defaults to $STOREFRONT_CATALOG, then the bundled demo.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, value_parser = ["plain", "json"], global = true)]
    pub log_format: Option<String>,

    /// Emit display data as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the product section.
    Show {
        #[arg(long)]
        brand: Option<String>,

        /// Show every brand tab instead of the first few.
        #[arg(long)]
        all_brands: bool,
    },

    /// Render the quick-preview of one product.
    Preview { id: ProductId },

    /// Add a product to the cart.
    Cart { id: ProductId },

    /// Ask for more products than the section shows.
    More,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_brand() {
        let cli = Cli::try_parse_from(["storefront", "show", "--brand", "Acme", "--all-brands"]).unwrap();
        match cli.command {
            Commands::Show { brand, all_brands } => {
                assert_eq!(brand.as_deref(), Some("Acme"));
                assert!(all_brands);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn parses_product_ids() {
        let cli = Cli::try_parse_from(["storefront", "--json", "preview", "42"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Preview { id } => assert_eq!(id, ProductId::new(42)),
            _ => panic!("Expected Preview command"),
        }
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(Cli::try_parse_from(["storefront", "cart", "abc"]).is_err());
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli =
            Cli::try_parse_from(["storefront", "more", "--catalog", "c.json", "--log-format", "json"])
                .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("c.json")));
        assert_eq!(cli.log_format.as_deref(), Some("json"));
    }
}
