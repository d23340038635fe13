//! Request path → reply.
//!
//! Order of precedence:
//!
//! 1. shutdown in progress → 503
//! 2. methods other than `GET`/`HEAD` → 405
//! 3. unprefixed page paths → 307 to the default locale
//! 4. `/sitemap.xml`, `/robots.txt`
//! 5. `/api/...` JSON
//! 6. files in the static directory
//! 7. locale page routes → HTML
//! 8. 404

use super::path::resolve_static;
use super::response::Reply;
use crate::content::PageSlug;
use crate::embed::serve::{NOT_FOUND_HTML, NotFoundVars, ROBOTS_TXT, RobotsVars};
use crate::generator::sitemap::sitemap_xml;
use crate::i18n::Locale;
use crate::i18n::path::{locale_of, with_locale};
use crate::page::{PageRoute, PageView};
use crate::routing::RouteDecision;
use crate::site::Site;
use crate::log;
use crate::utils::{html::escape, mime};
use std::fs;
use std::path::Path;
use tiny_http::Method;

const API_ROOT: &str = "/api";

pub fn route(site: &Site, method: &Method, url: &str, shutting_down: bool) -> Reply {
    if shutting_down {
        return Reply::unavailable();
    }
    if !matches!(method, Method::Get | Method::Head) {
        return Reply::method_not_allowed();
    }
    if let RouteDecision::Redirect(target) = site.middleware.decide(url) {
        return Reply::redirect(target);
    }

    let path = url.split(['?', '#']).next().unwrap_or(url);

    match path {
        "/sitemap.xml" => return Reply::xml(sitemap_xml(site.base_url())),
        "/robots.txt" => {
            let sitemap_url = format!("{}/sitemap.xml", site.base_url());
            return Reply::text(ROBOTS_TXT.render(&RobotsVars {
                sitemap_url: &sitemap_url,
            }));
        }
        _ => {}
    }

    if let Some(endpoint) = api_endpoint(path) {
        return api(site, endpoint);
    }

    if let Some(file) = resolve_static(path, &site.config.content.static_dir) {
        return static_file(&file);
    }

    match site.page(path) {
        Some(view) => Reply::html(view.to_html()),
        None => not_found(site, path),
    }
}

/// Part after `/api/`; bare `/api` is the empty endpoint.
fn api_endpoint(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(API_ROOT)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}

/// `content/{locale}/{slug}`, `page/{locale}/{slug}`, `pricing/{locale}`.
fn api(site: &Site, endpoint: &str) -> Reply {
    let segments: Vec<&str> = endpoint.trim_end_matches('/').split('/').collect();

    let parse_locale = |tag: &str| {
        Locale::parse(tag).ok_or_else(|| Reply::json_error(404, &format!("unsupported locale `{tag}`")))
    };
    let parse_slug = |name: &str| {
        name.parse::<PageSlug>()
            .map_err(|e| Reply::json_error(404, &e.to_string()))
    };

    let reply = match *segments.as_slice() {
        ["content", tag, name] => parse_locale(tag)
            .and_then(|locale| Ok((locale, parse_slug(name)?)))
            .map(|(locale, slug)| Reply::json(&site.content.page(slug, locale))),
        ["page", tag, name] => parse_locale(tag)
            .and_then(|locale| Ok((locale, parse_slug(name)?)))
            .map(|(locale, slug)| {
                let route = PageRoute::new(locale, slug);
                Reply::json(&PageView::build(site, route, &route.path()))
            }),
        ["pricing", tag] => parse_locale(tag).map(|locale| Reply::json(site.content.pricing(locale))),
        _ => Err(Reply::json_error(404, &format!("no endpoint at /api/{endpoint}"))),
    };

    reply.unwrap_or_else(|error| error)
}

fn static_file(path: &Path) -> Reply {
    match fs::read(path) {
        Ok(body) => Reply::new(200, mime::from_path(path), body),
        Err(e) => {
            log!("serve"; "failed to read {}: {}", path.display(), e);
            Reply::new(500, mime::types::PLAIN, "500 Internal Server Error")
        }
    }
}

fn not_found(site: &Site, path: &str) -> Reply {
    let locale = locale_of(path).unwrap_or(Locale::DEFAULT);
    let title = escape(&site.config.site.title);
    let home = with_locale("/", locale);

    Reply::html(NOT_FOUND_HTML.render(&NotFoundVars {
        lang: locale.as_str(),
        site: &title,
        home: &home,
    }))
    .with_status(404)
}
