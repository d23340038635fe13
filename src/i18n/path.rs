//! Locale prefix handling for URL paths.
//!
//! All functions are pure: paths are opaque strings, anything that does not
//! match `/{locale}` or `/{locale}/...` is treated as locale-free.
//!
//! | Input            | `strip_locale` | `redirect_target` |
//! |------------------|----------------|-------------------|
//! | `/`              | `/`            | `/ko`             |
//! | `/pricing`       | `/pricing`     | `/ko/pricing`     |
//! | `/en/contact`    | `/contact`     | none              |
//! | `/english`       | `/english`     | `/ko/english`     |

use super::Locale;
use regex::Regex;
use std::sync::LazyLock;

/// `/{locale}` optionally followed by `/rest`. Group 1 is the locale, group 2 the rest.
static LOCALE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<_> = Locale::ALL.iter().map(|l| l.as_str()).collect();
    let pattern = format!(r"^/({})(/.*)?$", alternatives.join("|"));
    Regex::new(&pattern).expect("locale prefix pattern is valid")
});

/// Whether `path` starts with a supported locale segment.
pub fn has_locale_prefix(path: &str) -> bool {
    LOCALE_PREFIX.is_match(path)
}

/// Locale carried by the leading path segment, if any.
pub fn locale_of(path: &str) -> Option<Locale> {
    LOCALE_PREFIX
        .captures(path)
        .and_then(|caps| Locale::parse(caps.get(1)?.as_str()))
}

/// Remove the leading locale segment.
///
/// Returns the input unchanged when no supported locale prefix is present,
/// and `/` when nothing remains after the prefix.
pub fn strip_locale(path: &str) -> String {
    match LOCALE_PREFIX.captures(path) {
        Some(caps) => caps
            .get(2)
            .map_or_else(|| "/".to_string(), |rest| rest.as_str().to_string()),
        None => path.to_string(),
    }
}

/// Prefix a locale-free path with `locale`. The root maps to `/{locale}`.
pub fn with_locale(path: &str, locale: Locale) -> String {
    match path {
        "" | "/" => format!("/{locale}"),
        p if p.starts_with('/') => format!("/{locale}{p}"),
        p => format!("/{locale}/{p}"),
    }
}

/// Where an unprefixed path should be redirected, `None` if it already has a locale.
pub fn redirect_target(path: &str) -> Option<String> {
    if has_locale_prefix(path) {
        None
    } else {
        Some(with_locale(path, Locale::DEFAULT))
    }
}

/// Same page in another locale (language toggle links).
pub fn switch_locale(path: &str, locale: Locale) -> String {
    with_locale(&strip_locale(path), locale)
}
