//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! url = "https://heimdex.co"     # base of sitemap <loc> entries
//! title = "HEIMDEX"
//!
//! [site.booking]                 # demo booking pages, per locale
//! en = "https://cal.com/jlee-heimdex/heimdex-demo"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, util::check_http_url};
use crate::i18n::Localized;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_URL: &str = "https://heimdex.co";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Public base URL.
    pub url: String,

    /// Site name on the 404 page. Page titles come from content documents.
    pub title: String,

    pub booking: BookingConfig,
}

/// Booking link overrides. Unset locales keep the built-in link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub ko: Option<String>,
    pub en: Option<String>,
}

pub struct SiteFields {
    pub url: FieldPath,
    pub title: FieldPath,
    pub booking_ko: FieldPath,
    pub booking_en: FieldPath,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITE_URL.to_string(),
            title: crate::content::DEFAULT_TITLE.to_string(),
            booking: BookingConfig::default(),
        }
    }
}

impl SiteSectionConfig {
    pub const FIELDS: SiteFields = SiteFields {
        url: FieldPath::new("site.url"),
        title: FieldPath::new("site.title"),
        booking_ko: FieldPath::new("site.booking.ko"),
        booking_en: FieldPath::new("site.booking.en"),
    };

    /// Base URL without trailing slash, ready for joining paths.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Validate URLs.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Err(message) = check_http_url(&self.url) {
            diag.error_with_hint(Self::FIELDS.url, message, "use format like https://heimdex.co");
        } else if let Ok(parsed) = url::Url::parse(&self.url)
            && (parsed.query().is_some() || parsed.fragment().is_some())
        {
            diag.error(Self::FIELDS.url, "URL must not carry a query or fragment");
        }

        if self.title.trim().is_empty() {
            diag.warn(Self::FIELDS.title, "title is empty");
        }

        let links = [
            (Self::FIELDS.booking_ko, &self.booking.ko),
            (Self::FIELDS.booking_en, &self.booking.en),
        ];
        for (field, link) in links {
            if let Some(link) = link
                && let Err(message) = check_http_url(link)
            {
                diag.error(field, message);
            }
        }
    }
}

impl BookingConfig {
    pub fn to_localized(&self) -> Localized<Option<String>> {
        Localized::new(self.ko.clone(), self.en.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.url, "https://heimdex.co");
        assert_eq!(config.site.title, "HEIMDEX");
        assert!(config.site.booking.ko.is_none());
        assert!(config.site.booking.en.is_none());
    }

    #[test]
    fn test_base_url_trims_slash() {
        let config = test_parse_config("[site]\nurl = \"https://example.com/\"");
        assert_eq!(config.site.base_url(), "https://example.com");
    }

    #[test]
    fn test_booking_override() {
        let config = test_parse_config("[site.booking]\nen = \"https://example.com/book\"");
        let links = config.site.booking.to_localized();
        assert_eq!(links.ko, None);
        assert_eq!(links.en.as_deref(), Some("https://example.com/book"));
    }

    #[test]
    fn test_validate_urls() {
        let config = test_parse_config(
            "[site]\nurl = \"heimdex.co\"\n[site.booking]\nko = \"mailto:hi@heimdex.co\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.url", "site.booking.ko"]);
    }

    #[test]
    fn test_validate_rejects_query() {
        let config = test_parse_config("[site]\nurl = \"https://heimdex.co/?a=1\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_empty_title_warns() {
        let config = test_parse_config("[site]\ntitle = \" \"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
