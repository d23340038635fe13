//! Navigation model: localized items, active state, language toggle.

use crate::content::PageSlug;
use crate::i18n::Locale;
use crate::i18n::path::{strip_locale, switch_locale, with_locale};
use serde::Serialize;

/// Pages in menu order.
const MENU: [PageSlug; 5] = [
    PageSlug::Home,
    PageSlug::ProductEntertainment,
    PageSlug::Pricing,
    PageSlug::Company,
    PageSlug::Contact,
];

fn menu_label(slug: PageSlug, locale: Locale) -> &'static str {
    match (locale, slug) {
        (Locale::Ko, PageSlug::Home) => "홈",
        (Locale::Ko, PageSlug::ProductEntertainment) => "제품",
        (Locale::Ko, PageSlug::Pricing) => "가격",
        (Locale::Ko, PageSlug::Company) => "회사",
        (Locale::Ko, PageSlug::Contact) => "문의",
        (Locale::En, PageSlug::Home) => "Home",
        (Locale::En, PageSlug::ProductEntertainment) => "Product",
        (Locale::En, PageSlug::Pricing) => "Pricing",
        (Locale::En, PageSlug::Company) => "Company",
        (Locale::En, PageSlug::Contact) => "Contact",
    }
}

fn cta_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Ko => "등록하기",
        Locale::En => "Sign Up",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: String,
}

/// Everything the site header shows for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub home: String,
    pub items: Vec<NavItem>,
    /// Same page in the other locale.
    pub switch_locale: Link,
    pub booking: Link,
}

impl Navigation {
    /// Build for the current request `path` (locale-prefixed) in `locale`.
    pub fn new(path: &str, locale: Locale, booking_link: &str) -> Self {
        let current = strip_locale(path);
        let items = MENU
            .into_iter()
            .map(|slug| NavItem {
                label: menu_label(slug, locale),
                href: with_locale(slug.route(), locale),
                active: is_active(slug.route(), &current),
            })
            .collect();

        let other = locale.other();
        Self {
            home: with_locale("/", locale),
            items,
            switch_locale: Link {
                label: other.label(),
                href: switch_locale(path, other),
            },
            booking: Link {
                label: cta_label(locale),
                href: booking_link.to_string(),
            },
        }
    }
}

/// Root is active only on `/`, other items on any path below them.
pub fn is_active(route: &str, current: &str) -> bool {
    if route.is_empty() || route == "/" {
        current == "/"
    } else {
        current.starts_with(route)
    }
}
