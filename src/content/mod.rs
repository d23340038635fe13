//! Localized page content.
//!
//! | Module        | Purpose                                              |
//! |---------------|------------------------------------------------------|
//! | `slug`        | Page identifiers, routes, backing documents          |
//! | `frontmatter` | Header + body document parsing                       |
//! | `source`      | Document sources (directory, embedded) with fallback |
//! | `pricing`     | Typed pricing table                                  |
//! | `links`       | Booking links                                        |

pub mod frontmatter;
mod links;
pub mod pricing;
mod slug;
mod source;

pub use links::BOOKING_LINKS;
pub use pricing::{PricingContent, pricing_content};
pub use slug::{PageSlug, UnknownPage};
pub use source::{ContentSource, DocumentStore, EmbeddedDocuments};

use crate::i18n::{Locale, Localized};
use serde::{Deserialize, Serialize};

/// A JSON object map for arbitrary header fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Title used when a document does not provide one.
pub const DEFAULT_TITLE: &str = "HEIMDEX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
        }
    }
}

/// Content of one page in one locale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageContent {
    pub metadata: PageMetadata,
    /// Every header field of the document, passed through untouched.
    pub sections: JsonMap,
    /// Document body.
    pub raw: String,
}

impl PageContent {
    /// Content served when a document cannot be read or parsed.
    pub fn fallback() -> Self {
        Self::default()
    }

    /// Build from a parsed document, defaulting missing metadata.
    pub fn from_document(doc: frontmatter::Document<'_>) -> Self {
        let field = |key: &str| {
            doc.fields
                .get(key)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let metadata = PageMetadata {
            title: field("title").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: field("description").unwrap_or_default(),
        };

        Self {
            metadata,
            sections: doc.fields,
            raw: doc.body.to_string(),
        }
    }
}

/// All localized content of the site, built once at startup.
pub struct SiteContent {
    pages: Box<dyn ContentSource>,
    pricing: &'static Localized<PricingContent>,
    booking: Localized<String>,
}

impl SiteContent {
    pub fn new(pages: Box<dyn ContentSource>) -> Self {
        Self {
            pages,
            pricing: &pricing::PRICING,
            booking: BOOKING_LINKS.map(|_, link| (*link).to_string()),
        }
    }

    /// Replace booking links, e.g. from `[site.booking]`.
    pub fn with_booking(mut self, overrides: &Localized<Option<String>>) -> Self {
        for (locale, link) in overrides.iter() {
            if let Some(link) = link {
                *self.booking.get_mut(locale) = link.clone();
            }
        }
        self
    }

    /// Page content, never failing: unreadable documents yield [`PageContent::fallback`].
    pub fn page(&self, slug: PageSlug, locale: Locale) -> PageContent {
        self.pages.load(slug, locale)
    }

    pub fn pricing(&self, locale: Locale) -> &'static PricingContent {
        self.pricing.get(locale)
    }

    pub fn pricing_table(&self) -> &'static Localized<PricingContent> {
        self.pricing
    }

    pub fn booking_link(&self, locale: Locale) -> &str {
        self.booking.get(locale)
    }

    pub fn source(&self) -> &dyn ContentSource {
        self.pages.as_ref()
    }
}
