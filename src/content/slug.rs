//! Page identifiers and their routes/documents.

use crate::i18n::{Locale, Localized};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A content page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageSlug {
    Home,
    Company,
    ProductEntertainment,
    Pricing,
    Contact,
}

impl PageSlug {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Company,
        Self::ProductEntertainment,
        Self::Pricing,
        Self::Contact,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Company => "company",
            Self::ProductEntertainment => "product-entertainment",
            Self::Pricing => "pricing",
            Self::Contact => "contact",
        }
    }

    /// Locale-free route of the page. Home is the empty route.
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Company => "/company",
            Self::ProductEntertainment => "/product/entertainment",
            Self::Pricing => "/pricing",
            Self::Contact => "/contact",
        }
    }

    /// Page for a locale-free path (`/`, `/company`, `/pricing/`, ...).
    pub fn from_route(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|slug| slug.route() == path)
    }

    /// Document backing this page in each locale.
    ///
    /// Pricing and contact copy lives in the main landing document.
    pub const fn documents(self) -> Localized<&'static str> {
        match self {
            Self::Home | Self::Pricing | Self::Contact => {
                Localized::new("landing-main-content.md", "landing-main-content.en.md")
            }
            Self::Company => Localized::new(
                "landing-company-content.md",
                "landing-company-content.en.md",
            ),
            Self::ProductEntertainment => Localized::new(
                "landing-product-entertainment-content.md",
                "landing-product-entertainment-content.en.md",
            ),
        }
    }

    /// Document file name for this page in `locale`.
    pub fn document(self, locale: Locale) -> &'static str {
        *self.documents().get(locale)
    }
}

impl fmt::Display for PageSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page `{0}` (expected one of: home, company, product-entertainment, pricing, contact)")]
pub struct UnknownPage(pub String);

impl FromStr for PageSlug {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}
