//! The immutable site: configuration plus everything built from it once at startup.

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::page::{PageRoute, PageView};
use crate::routing::Middleware;

pub struct Site {
    pub config: SiteConfig,
    pub content: SiteContent,
    pub middleware: Middleware,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        let content =
            SiteContent::new(config.content.open()).with_booking(&config.site.booking.to_localized());
        let middleware = config.routing.middleware();
        Self {
            config,
            content,
            middleware,
        }
    }

    /// Public base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.config.site.base_url()
    }

    /// View of a locale-prefixed page path, `None` when no page lives there.
    pub fn page(&self, path: &str) -> Option<PageView> {
        PageRoute::resolve(path).map(|route| PageView::build(self, route, path))
    }
}
