//! HEIMDEX - bilingual (Korean/English) site server with locale routing.

mod cli;
mod config;
mod content;
mod core;
mod embed;
mod generator;
mod i18n;
mod logger;
mod page;
mod routing;
mod site;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use site::Site;
use std::sync::Arc;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;
    let site = Arc::new(Site::new(config));

    match &cli.command {
        Commands::Serve { .. } => cli::serve::serve(site),
        Commands::Sitemap { output, .. } => cli::sitemap::run_sitemap(&site, output.as_deref()),
        Commands::Content { slug, args } => cli::query::run_content(&site, *slug, args),
        Commands::Pricing { args } => cli::query::run_pricing(&site, args),
        Commands::Check { warn_only } => cli::check::run_check(&site, *warn_only),
    }
}
