//! Skeletal HTML for a page view: metadata, alternates, nav and escaped text.
//!
//! Styling and components are left to the front end; this output is what
//! crawlers and no-JS clients see.

use super::{PageBody, PageView};
use crate::content::{JsonMap, PageContent, PricingContent};
use crate::embed::serve::{PAGE_HTML, PageVars};
use crate::utils::html::escape;
use serde_json::Value;
use std::fmt::Write;

/// Header fields already shown in `<head>`.
const HEAD_FIELDS: [&str; 2] = ["title", "description"];

pub fn render(view: &PageView) -> String {
    let main = match &view.body {
        PageBody::Document(content) => render_document(content),
        PageBody::Pricing(pricing) => render_pricing(pricing, &view.nav.booking.href),
    };

    PAGE_HTML.render(&PageVars {
        lang: view.locale.as_str(),
        title: &escape(&view.title),
        description: &escape(&view.description),
        canonical: &escape(&view.url),
        alternates: &render_alternates(view),
        nav: &render_nav(view),
        slug: view.slug.as_str(),
        main: &main,
    })
}

fn render_alternates(view: &PageView) -> String {
    view.alternates
        .iter()
        .map(|alt| {
            format!(
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                alt.hreflang,
                escape(&alt.href)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_nav(view: &PageView) -> String {
    let nav = &view.nav;
    let mut out = String::new();

    let _ = writeln!(out, r#"<nav><a href="{}">HEIMDEX</a>"#, escape(&nav.home));
    out.push_str("<ul>\n");
    for item in &nav.items {
        let current = if item.active { r#" aria-current="page""# } else { "" };
        let _ = writeln!(
            out,
            r#"<li><a href="{}"{current}>{}</a></li>"#,
            escape(&item.href),
            escape(item.label)
        );
    }
    out.push_str("</ul>\n");
    let _ = writeln!(
        out,
        r#"<a href="{}" hreflang="{}">{}</a>"#,
        escape(&nav.switch_locale.href),
        view.locale.other(),
        nav.switch_locale.label
    );
    let _ = write!(
        out,
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a></nav>"#,
        escape(&nav.booking.href),
        escape(nav.booking.label)
    );
    out
}

fn render_document(content: &PageContent) -> String {
    let mut out = format!("<h1>{}</h1>\n", escape(&content.metadata.title));
    render_fields(&mut out, &content.sections);

    for paragraph in content.raw.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
        let _ = writeln!(out, "<p>{}</p>", escape(paragraph));
    }
    out
}

/// Scalar and list header fields, in document order. Nested tables are JSON-only.
fn render_fields(out: &mut String, fields: &JsonMap) {
    for (key, value) in fields {
        if HEAD_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::Array(items) => {
                let _ = writeln!(out, r#"<ul data-field="{}">"#, escape(key));
                for item in items.iter().filter_map(scalar_text) {
                    let _ = writeln!(out, "<li>{}</li>", escape(&item));
                }
                out.push_str("</ul>\n");
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    let _ = writeln!(out, r#"<p data-field="{}">{}</p>"#, escape(key), escape(&text));
                }
            }
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn render_pricing(pricing: &PricingContent, booking: &str) -> String {
    let booking = escape(booking);
    let list = |items: &[&str]| {
        items
            .iter()
            .map(|item| format!("<li>{}</li>", escape(item)))
            .collect::<String>()
    };

    let mut out = String::new();
    let hero = &pricing.hero;
    let _ = writeln!(out, "<section data-section=\"hero\"><h1>{}</h1>", escape(hero.h1));
    let _ = writeln!(out, "<p>{}</p>", escape(hero.subheadline));
    let _ = writeln!(
        out,
        r#"<a href="{booking}" target="_blank" rel="noopener noreferrer">{}</a> <small>{}</small></section>"#,
        escape(hero.cta),
        escape(hero.cta_microcopy)
    );

    let plan = &pricing.plan;
    let _ = writeln!(
        out,
        "<section data-section=\"plan\"><h2>{}</h2><p>{}</p><p>{}</p><ul>{}</ul><p>{}</p></section>",
        escape(plan.name),
        escape(plan.tagline),
        escape(plan.pricing_label),
        list(plan.features),
        escape(plan.deployment_options)
    );

    let accordion = &pricing.accordion;
    let _ = writeln!(
        out,
        "<section data-section=\"accordion\"><h2>{}</h2><ul>{}</ul></section>",
        escape(accordion.title),
        list(accordion.factors)
    );

    let trust = &pricing.trust;
    let _ = writeln!(
        out,
        "<section data-section=\"trust\"><h2>{}</h2><ul>{}</ul></section>",
        escape(trust.heading),
        list(trust.points)
    );

    let cta = &pricing.final_cta;
    let _ = write!(
        out,
        r#"<section data-section="final-cta"><h2>{}</h2><a href="{booking}" target="_blank" rel="noopener noreferrer">{}</a><p>{}</p></section>"#,
        escape(cta.heading),
        escape(cta.cta),
        escape(cta.microcopy)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{PageSlug, frontmatter};
    use crate::i18n::Locale;
    use crate::page::PageRoute;
    use crate::site::Site;

    fn view(locale: Locale, slug: PageSlug, path: &str) -> PageView {
        PageView::build(&Site::new(SiteConfig::default()), PageRoute::new(locale, slug), path)
    }

    #[test]
    fn test_head_and_alternates() {
        let html = view(Locale::En, PageSlug::Contact, "/en/contact").to_html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://heimdex.co/en/contact">"#));
        assert!(html.contains(r#"hreflang="ko" href="https://heimdex.co/ko/contact""#));
        assert!(html.contains(r#"hreflang="x-default" href="https://heimdex.co/ko/contact""#));
        assert!(html.contains(r#"data-page="contact""#));
    }

    #[test]
    fn test_nav_markup() {
        let html = view(Locale::Ko, PageSlug::Company, "/ko/company").to_html();

        assert!(html.contains(r#"<a href="/ko/company" aria-current="page">회사</a>"#));
        assert!(html.contains(r#"<a href="/en/company" hreflang="en">EN</a>"#));
        assert!(html.contains("등록하기"));
    }

    #[test]
    fn test_pricing_sections() {
        let html = view(Locale::En, PageSlug::Pricing, "/en/pricing").to_html();

        assert!(html.contains("<h1>One plan. Tailored to your workflow.</h1>"));
        assert!(html.contains("<h2>HEIMDEX Access</h2>"));
        assert!(html.contains("<li>Hybrid semantic search (dense + BM25)</li>"));
        assert!(html.contains("https://cal.com/jlee-heimdex/heimdex-demo"));
        assert!(html.contains("we&#39;ll quickly diagnose"));
    }

    #[test]
    fn test_document_fields_escaped() {
        let doc = frontmatter::parse(
            "---\ntitle: <Title>\nheadline: Tom & Jerry\nitems:\n  - <a>\n  - b\n---\nfirst\n\nsecond <b>\n",
        )
        .unwrap();
        let html = render_document(&PageContent::from_document(doc));

        assert!(html.contains("<h1>&lt;Title&gt;</h1>"));
        assert!(html.contains(r#"<p data-field="headline">Tom &amp; Jerry</p>"#));
        assert!(html.contains("<li>&lt;a&gt;</li>"));
        assert!(html.contains("<p>first</p>"));
        assert!(html.contains("<p>second &lt;b&gt;</p>"));
        assert!(!html.contains(r#"data-field="title""#));
    }
}
