//! Request path to page mapping.
//!
//! ```text
//! /ko                        → PageRoute { locale: Ko, slug: Home }
//! /en/product/entertainment  → PageRoute { locale: En, slug: ProductEntertainment }
//! /en/pricing/               → PageRoute { locale: En, slug: Pricing }
//! /en/blog                   → None
//! /pricing                   → None (no locale; the middleware redirects first)
//! ```

use crate::content::PageSlug;
use crate::i18n::Locale;
use crate::i18n::path::{locale_of, strip_locale, with_locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRoute {
    pub locale: Locale,
    pub slug: PageSlug,
}

impl PageRoute {
    pub const fn new(locale: Locale, slug: PageSlug) -> Self {
        Self { locale, slug }
    }

    /// Page for a locale-prefixed request path, ignoring any query string.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split_once('?').map_or(path, |(p, _)| p);
        let locale = locale_of(path)?;
        let slug = PageSlug::from_route(&strip_locale(path))?;
        Some(Self { locale, slug })
    }

    /// Canonical path, e.g. `/en/pricing`.
    pub fn path(self) -> String {
        with_locale(self.slug.route(), self.locale)
    }

    /// Every page in every locale, locale-major.
    pub fn all() -> impl Iterator<Item = Self> {
        Locale::ALL
            .into_iter()
            .flat_map(|locale| PageSlug::ALL.into_iter().map(move |slug| Self::new(locale, slug)))
    }
}
