use std::io::{self, Write};

use clap::Parser;

use storefront::app;
use storefront::cli::Cli;
use storefront::config::Config;
use storefront::sink::LoggingSink;
use storefront_observability::LogFormat;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let log_format = match cli.log_format.as_deref() {
        Some(format) => format.parse::<LogFormat>()?,
        None => config.log_format,
    };
    storefront_observability::init_with(log_format);
    tracing::debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&cli, &config, LoggingSink, &mut out)?;
    out.flush()?;
    Ok(())
}
