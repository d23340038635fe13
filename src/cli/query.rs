//! `heimdex content` / `heimdex pricing`: content bundles as JSON.
//!
//! Without `--locale` every locale is printed, keyed by tag:
//!
//! ```json
//! { "ko": { ... }, "en": { ... } }
//! ```

use anyhow::Result;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::QueryArgs;
use crate::content::PageSlug;
use crate::site::Site;

pub fn run_content(site: &Site, slug: PageSlug, args: &QueryArgs) -> Result<()> {
    print_json(&content_json(site, slug, args)?, args.pretty)
}

pub fn run_pricing(site: &Site, args: &QueryArgs) -> Result<()> {
    print_json(&pricing_json(site, args)?, args.pretty)
}

fn content_json(site: &Site, slug: PageSlug, args: &QueryArgs) -> Result<JsonValue> {
    let content = &site.content;
    match args.locale {
        Some(locale) => to_json(&content.page(slug, locale)),
        None => to_json(&slug.documents().map(|locale, _| content.page(slug, locale))),
    }
}

fn pricing_json(site: &Site, args: &QueryArgs) -> Result<JsonValue> {
    match args.locale {
        Some(locale) => to_json(site.content.pricing(locale)),
        None => to_json(site.content.pricing_table()),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<JsonValue> {
    Ok(serde_json::to_value(value)?)
}

fn print_json(value: &JsonValue, pretty: bool) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{formatted}");
    Ok(())
}
