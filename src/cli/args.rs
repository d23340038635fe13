//! Command-line interface definitions.

use crate::content::PageSlug;
use crate::i18n::Locale;
use clap::{ColorChoice, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// HEIMDEX bilingual marketing site server
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: heimdex.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "heimdex.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Read page documents from this directory instead of the embedded copy
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content_dir: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve the localized site over HTTP
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Log every request
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Write sitemap.xml for every locale and page
    #[command(visible_alias = "m")]
    Sitemap {
        /// Output file (default: stdout)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Override the site URL used in <loc> entries
        #[arg(short = 'U', long = "base-url", value_hint = clap::ValueHint::Url)]
        base_url: Option<String>,
    },

    /// Print a page's content bundle as JSON
    #[command(visible_alias = "c")]
    Content {
        /// Page: home, company, product-entertainment, pricing, contact
        slug: PageSlug,

        #[command(flatten)]
        args: QueryArgs,
    },

    /// Print the pricing copy as JSON
    #[command(visible_alias = "p")]
    Pricing {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Check that every page document loads and pricing copy is consistent
    #[command(visible_alias = "v")]
    Check {
        /// Report problems without failing
        #[arg(long, short = 'w')]
        warn_only: bool,
    },
}

/// Shared arguments of the JSON query commands.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Only this locale (default: every locale, keyed by tag)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

impl Cli {
    pub const fn verbose(&self) -> bool {
        matches!(self.command, Commands::Serve { verbose: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["heimdex", "serve", "-p", "8080", "--content-dir", "docs", "-V"]);
        assert!(cli.verbose());
        assert_eq!(cli.content_dir, Some(PathBuf::from("docs")));
        match cli.command {
            Commands::Serve { interface, port, .. } => {
                assert_eq!(interface, None);
                assert_eq!(port, Some(8080));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_content_slug_and_locale() {
        let cli = Cli::parse_from(["heimdex", "c", "product-entertainment", "-l", "en", "-p"]);
        match cli.command {
            Commands::Content { slug, args } => {
                assert_eq!(slug, PageSlug::ProductEntertainment);
                assert_eq!(args.locale, Some(Locale::En));
                assert!(args.pretty);
            }
            _ => panic!("expected content"),
        }
    }

    #[test]
    fn test_rejects_unknown_locale_and_slug() {
        assert!(Cli::try_parse_from(["heimdex", "pricing", "-l", "fr"]).is_err());
        assert!(Cli::try_parse_from(["heimdex", "content", "blog"]).is_err());
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::parse_from(["heimdex", "check"]);
        assert_eq!(cli.config, PathBuf::from("heimdex.toml"));
        assert!(matches!(cli.command, Commands::Check { warn_only: false }));
    }
}
