//! Embedded templates for served documents.
//!
//! - `template` - Template types for typed variable injection
//! - `serve` - Page shell, 404 page, robots.txt
//!
//! ```ignore
//! use embed::serve::{ROBOTS_TXT, RobotsVars};
//! let body = ROBOTS_TXT.render(&RobotsVars { sitemap_url: "https://heimdex.co/sitemap.xml" });
//! ```

mod template;

pub use template::{Template, TemplateVars, fill};

pub mod serve {
    use super::{Template, TemplateVars, fill};

    /// Variables for page.html. Values are inserted verbatim: escape first.
    pub struct PageVars<'a> {
        pub lang: &'a str,
        pub title: &'a str,
        pub description: &'a str,
        pub canonical: &'a str,
        pub alternates: &'a str,
        pub nav: &'a str,
        pub slug: &'a str,
        pub main: &'a str,
    }

    impl TemplateVars for PageVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("__LANG__", self.lang),
                    ("__TITLE__", self.title),
                    ("__DESCRIPTION__", self.description),
                    ("__CANONICAL__", self.canonical),
                    ("__ALTERNATES__", self.alternates),
                    ("__NAV__", self.nav),
                    ("__SLUG__", self.slug),
                    ("__MAIN__", self.main),
                ],
            )
        }
    }

    pub const PAGE_HTML: Template<PageVars<'static>> =
        Template::new(include_str!("serve/page.html"));

    pub struct NotFoundVars<'a> {
        pub lang: &'a str,
        pub site: &'a str,
        pub home: &'a str,
    }

    impl TemplateVars for NotFoundVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("__LANG__", self.lang),
                    ("__SITE__", self.site),
                    ("__HOME__", self.home),
                ],
            )
        }
    }

    pub const NOT_FOUND_HTML: Template<NotFoundVars<'static>> =
        Template::new(include_str!("serve/not_found.html"));

    pub struct RobotsVars<'a> {
        pub sitemap_url: &'a str,
    }

    impl TemplateVars for RobotsVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(content, &[("__SITEMAP_URL__", self.sitemap_url)])
        }
    }

    pub const ROBOTS_TXT: Template<RobotsVars<'static>> =
        Template::new(include_str!("serve/robots.txt"));
}
