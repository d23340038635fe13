//! Page view model and its HTML/JSON representations.
//!
//! | Module  | Purpose                                   |
//! |---------|-------------------------------------------|
//! | `route` | Request path → (locale, page)             |
//! | `nav`   | Header navigation for a request           |
//! | `html`  | Skeletal HTML document for a [`PageView`] |

mod html;
pub mod nav;
mod route;

pub use nav::Navigation;
pub use route::PageRoute;

use crate::content::{PageContent, PageSlug, PricingContent};
use crate::i18n::Locale;
use crate::i18n::path::with_locale;
use crate::site::Site;
use serde::Serialize;

/// Payload of a page: a document bundle, or the typed pricing copy.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum PageBody {
    Document(PageContent),
    Pricing(&'static PricingContent),
}

/// `<link rel="alternate" hreflang=...>` target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

/// Everything needed to present one page in one locale.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub locale: Locale,
    pub slug: PageSlug,
    /// Canonical absolute URL.
    pub url: String,
    pub title: String,
    pub description: String,
    pub nav: Navigation,
    pub alternates: Vec<Alternate>,
    pub body: PageBody,
}

impl PageView {
    /// Build the view of `route`, requested as `request_path`.
    pub fn build(site: &Site, route: PageRoute, request_path: &str) -> Self {
        let PageRoute { locale, slug } = route;
        let base = site.base_url();

        let (title, description, body) = match slug {
            PageSlug::Pricing => {
                let pricing = site.content.pricing(locale);
                (
                    pricing.metadata.title.to_string(),
                    pricing.metadata.description.to_string(),
                    PageBody::Pricing(pricing),
                )
            }
            _ => {
                let content = site.content.page(slug, locale);
                (
                    content.metadata.title.clone(),
                    content.metadata.description.clone(),
                    PageBody::Document(content),
                )
            }
        };

        Self {
            locale,
            slug,
            url: format!("{base}{}", route.path()),
            title,
            description,
            nav: Navigation::new(request_path, locale, site.content.booking_link(locale)),
            alternates: alternates(base, slug),
            body,
        }
    }

    pub fn to_html(&self) -> String {
        html::render(self)
    }
}

/// One link per locale plus `x-default` pointing at the default locale.
fn alternates(base: &str, slug: PageSlug) -> Vec<Alternate> {
    let mut links: Vec<_> = Locale::ALL
        .into_iter()
        .map(|locale| Alternate {
            hreflang: locale.as_str(),
            href: format!("{base}{}", with_locale(slug.route(), locale)),
        })
        .collect();
    links.push(Alternate {
        hreflang: "x-default",
        href: format!("{base}{}", with_locale(slug.route(), Locale::DEFAULT)),
    });
    links
}
