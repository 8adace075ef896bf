//! Storefront shell: a terminal page that renders one product section.

pub mod app;
pub mod cli;
pub mod config;
pub mod render;
pub mod sink;
