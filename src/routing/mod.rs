//! Locale routing middleware.
//!
//! Runs before any page handling and decides whether a request proceeds or is
//! redirected to the default locale:
//!
//! ```text
//! /                 → 307 /ko
//! /pricing?ref=x    → 307 /ko/pricing?ref=x
//! /en/pricing       → proceed
//! /api/pricing/en   → proceed (excluded)
//! /logo.svg         → proceed (asset)
//! /v1.2/pricing     → 307 /ko/v1.2/pricing (only the last segment marks an asset)
//! /회사              → 307 /ko/%ED%9A%8C%EC%82%AC
//! ```
//!
//! Redirect locations are percent-encoded so they fit in a header; existing
//! `%XX` escapes pass through unchanged.

use crate::i18n::path::redirect_target;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes a `Location` header cannot carry as is. Non-ASCII is always encoded.
const LOCATION: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Paths the middleware never redirects.
pub const DEFAULT_EXCLUDE: &[&str] = &[
    "/api",
    "/static",
    "/favicon.ico",
    "/sitemap.xml",
    "/robots.txt",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Handle the request as is.
    Proceed,
    /// Redirect to this location (path and query).
    Redirect(String),
}

#[derive(Debug, Clone)]
pub struct Middleware {
    exclude: Vec<String>,
}

impl Default for Middleware {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE.iter().map(|s| (*s).to_string()))
    }
}

impl Middleware {
    /// Exclusions are path prefixes matched on segment boundaries.
    pub fn new(exclude: impl IntoIterator<Item = String>) -> Self {
        let exclude = exclude
            .into_iter()
            .map(|p| normalize_prefix(&p))
            .filter(|p| !p.is_empty())
            .collect();
        Self { exclude }
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclude
    }

    /// Decide for a request target (`/path?query`).
    pub fn decide(&self, target: &str) -> RouteDecision {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };

        if self.is_excluded(path) {
            return RouteDecision::Proceed;
        }

        let Some(location) = redirect_target(path) else {
            return RouteDecision::Proceed;
        };
        let location = match query {
            Some(q) if !q.is_empty() => format!("{location}?{q}"),
            _ => location,
        };
        RouteDecision::Redirect(utf8_percent_encode(&location, LOCATION).to_string())
    }

    /// Operational paths: configured prefixes and files (a dot in the last segment).
    pub fn is_excluded(&self, path: &str) -> bool {
        if is_asset(path) {
            return true;
        }
        self.exclude.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

fn is_asset(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|last| last.contains('.'))
}

/// `api/` → `/api`
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
