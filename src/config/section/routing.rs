//! `[routing]` section configuration.
//!
//! ```toml
//! [routing]
//! exclude = ["/api", "/static", "/favicon.ico", "/sitemap.xml", "/robots.txt", "/health"]
//! ```
//!
//! Setting `exclude` replaces the default list. Paths whose last segment
//! contains a dot are always excluded.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::i18n::path::has_locale_prefix;
use crate::routing::{DEFAULT_EXCLUDE, Middleware};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Path prefixes served without a locale redirect.
    pub exclude: Vec<String>,
}

pub struct RoutingFields {
    pub exclude: FieldPath,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDE.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl RoutingConfig {
    pub const FIELDS: RoutingFields = RoutingFields {
        exclude: FieldPath::new("routing.exclude"),
    };

    pub fn middleware(&self) -> Middleware {
        Middleware::new(self.exclude.iter().cloned())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for prefix in &self.exclude {
            let trimmed = prefix.trim();
            if trimmed.is_empty() || trimmed == "/" {
                diag.error(
                    Self::FIELDS.exclude,
                    format!("`{prefix}` is not a path prefix"),
                );
            } else if has_locale_prefix(trimmed) {
                diag.warn(
                    Self::FIELDS.exclude,
                    format!("`{prefix}` is already locale-prefixed and never redirected"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::routing::RouteDecision;

    #[test]
    fn test_routing_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.routing.exclude, DEFAULT_EXCLUDE);
    }

    #[test]
    fn test_exclude_replaces_defaults() {
        let config = test_parse_config("[routing]\nexclude = [\"/health\"]");
        let mw = config.routing.middleware();

        assert_eq!(mw.decide("/health"), RouteDecision::Proceed);
        assert_eq!(
            mw.decide("/api/pricing/en"),
            RouteDecision::Redirect("/ko/api/pricing/en".into())
        );
    }

    #[test]
    fn test_validate_catch_all_prefix() {
        let config = test_parse_config("[routing]\nexclude = [\"/\", \"/en/x\", \"/api\"]");
        let mut diag = ConfigDiagnostics::new();
        config.routing.validate(&mut diag);

        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.warnings().len(), 1);
    }
}
