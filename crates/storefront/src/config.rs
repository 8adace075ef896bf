//! Environment-driven configuration for the storefront shell.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, ensure};

use storefront_catalog::{DEFAULT_BRAND_LIMIT, DEFAULT_GRID_LIMIT, DEFAULT_SECTION_TITLE, SectionConfig};
use storefront_observability::LogFormat;

pub const CATALOG_VAR: &str = "STOREFRONT_CATALOG";
pub const TITLE_VAR: &str = "STOREFRONT_TITLE";
pub const BRAND_LIMIT_VAR: &str = "STOREFRONT_BRAND_LIMIT";
pub const GRID_LIMIT_VAR: &str = "STOREFRONT_GRID_LIMIT";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog file; `None` means the bundled demo catalog.
    pub catalog_path: Option<PathBuf>,
    pub title: String,
    pub brand_limit: usize,
    pub grid_limit: usize,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            title: DEFAULT_SECTION_TITLE.to_string(),
            brand_limit: DEFAULT_BRAND_LIMIT,
            grid_limit: DEFAULT_GRID_LIMIT,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let config = Self {
            catalog_path: var(CATALOG_VAR).map(PathBuf::from),
            title: var(TITLE_VAR).unwrap_or(defaults.title),
            brand_limit: parse_or(BRAND_LIMIT_VAR, var(BRAND_LIMIT_VAR), defaults.brand_limit)?,
            grid_limit: parse_or(GRID_LIMIT_VAR, var(GRID_LIMIT_VAR), defaults.grid_limit)?,
            log_format: parse_or(LOG_FORMAT_VAR, var(LOG_FORMAT_VAR), defaults.log_format)?,
        };

        ensure!(config.brand_limit >= 1, "{BRAND_LIMIT_VAR} must be at least 1");
        ensure!(config.grid_limit >= 1, "{GRID_LIMIT_VAR} must be at least 1");

        Ok(config)
    }

    pub fn section_config(&self) -> SectionConfig {
        SectionConfig {
            title: self.title.clone(),
            brand_limit: self.brand_limit,
            grid_limit: self.grid_limit,
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| anyhow::anyhow!("{e}"))
            .with_context(|| format!("invalid {key} value {value:?}")),
        None => Ok(default),
    }
}
