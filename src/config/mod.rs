//! Site configuration for `heimdex.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [serve], [content], [routing]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file discovery, URL checks
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! A missing config file is not an error: every section has defaults, and
//! the embedded documents make the binary self-contained.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BookingConfig, ContentConfig, RoutingConfig, ServeConfig, SiteSectionConfig, SourceKind,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{Cli, Commands};
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `heimdex.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, `None` when running on defaults.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root: parent of the config file, or the working directory.
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

impl SiteConfig {
    /// Load configuration for the parsed command line.
    ///
    /// Searches upward from the working directory for the config file,
    /// applies CLI overrides, then validates.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.finalize(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored: {}", display_path, fields.join(", "));
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Resolve paths against the root and apply CLI overrides.
    fn finalize(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose());

        // --content-dir implies reading from disk, relative to the working directory.
        if let Some(dir) = &cli.content_dir {
            self.content.dir = std::path::absolute(dir).unwrap_or_else(|_| dir.clone());
            self.content.source = SourceKind::Directory;
        }

        let root = crate::utils::path::normalize_path(&self.root);
        self.content.normalize(&root);
        self.root = root;

        self.apply_command_options(cli);
    }

    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Serve {
                interface, port, ..
            } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Sitemap { base_url, .. } => {
                Self::update_option(&mut self.site.url, base_url.as_ref());
            }
            Commands::Content { .. } | Commands::Pricing { .. } | Commands::Check { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, reporting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.serve.validate(&mut diag);
        self.content.validate(&mut diag);
        self.routing.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config text, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("heimdex").chain(args.iter().copied()))
    }

    #[test]
    fn test_invalid_toml() {
        assert!(SiteConfig::parse_with_ignored("[site\nurl = \"x\"").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.config_path.is_none());
        assert_eq!(config.site.url, "https://heimdex.co");
        assert_eq!(config.serve.port, 5277);
        assert_eq!(config.content.source, SourceKind::Embedded);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[build]\nminify = true\n[serve]\nwatch = true";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert_eq!(ignored.len(), 2);
        assert!(ignored.iter().any(|f| f.contains("build")));
        assert!(ignored.iter().any(|f| f.contains("serve.watch")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nurl = \"https://heimdex.co\"\n[content]\nsource = \"embedded\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_serve_overrides() {
        let mut config = SiteConfig::default();
        config.root = std::env::temp_dir();
        config.finalize(&cli(&["serve", "-p", "8080", "-i", "0.0.0.0"]));

        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.serve.interface.to_string(), "0.0.0.0");
    }

    #[test]
    fn test_partial_serve_override_keeps_config() {
        let mut config = test_parse_config("[serve]\nport = 3000\ninterface = \"0.0.0.0\"");
        config.root = std::env::temp_dir();
        config.finalize(&cli(&["serve", "-p", "4000"]));

        assert_eq!(config.serve.port, 4000);
        assert_eq!(config.serve.interface.to_string(), "0.0.0.0");
    }

    #[test]
    fn test_sitemap_base_url_override() {
        let mut config = SiteConfig::default();
        config.root = std::env::temp_dir();
        config.finalize(&cli(&["sitemap", "--base-url", "https://staging.heimdex.co/"]));

        assert_eq!(config.site.base_url(), "https://staging.heimdex.co");
    }

    #[test]
    fn test_content_dir_switches_to_directory() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir(&docs).unwrap();

        let mut config = SiteConfig::default();
        config.root = dir.path().to_path_buf();
        config.finalize(&cli(&["check", "--content-dir", docs.to_str().unwrap()]));

        assert_eq!(config.content.source, SourceKind::Directory);
        assert!(config.content.dir.ends_with("docs"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_paths_resolved_against_root() {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config("[content]\ndir = \"content\"\nstatic_dir = \"public\"");
        config.root = dir.path().to_path_buf();
        config.finalize(&cli(&["check"]));

        assert!(config.content.dir.is_absolute());
        assert!(config.content.dir.ends_with("content"));
        assert!(config.content.static_dir.ends_with("public"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[site]\nurl = \"not a url\"\n[serve]\nport = 0\n[content]\nsource = \"directory\"\ndir = \"/nonexistent/heimdex/docs\"",
        );

        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:#}");
        };
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.url", "serve.port", "content.dir"]);
    }
}
