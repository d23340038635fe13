//! Sitemap generation.
//!
//! Lists every page in every locale for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://heimdex.co/ko</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>monthly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::content::PageSlug;
use crate::page::PageRoute;
use crate::utils::date::DateTimeUtc;
use std::borrow::Cow;
use std::fmt::Write;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const CHANGEFREQ: &str = "monthly";

/// Sitemap XML for `base_url`, dated today (UTC).
pub fn sitemap_xml(base_url: &str) -> String {
    Sitemap::build(base_url, &DateTimeUtc::now().to_date()).into_xml()
}

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: String,
    priority: f32,
}

impl Sitemap {
    /// One entry per locale and page, locales outermost.
    pub fn build(base_url: &str, lastmod: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');

        let urls = PageRoute::all()
            .map(|route| UrlEntry {
                loc: format!("{base_url}{}", route.path()),
                lastmod: lastmod.to_string(),
                priority: if route.slug == PageSlug::Home { 1.0 } else { 0.8 },
            })
            .collect();

        Self { urls }
    }

    pub fn url_count(&self) -> usize {
        self.urls.len()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 * (self.urls.len() + 1));

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&escape_xml(&entry.lastmod));
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(CHANGEFREQ);
            xml.push_str("</changefreq>\n");
            let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
