//! Where page documents come from.
//!
//! - [`DocumentStore`]: a directory on disk, re-read on every lookup
//! - [`EmbeddedDocuments`]: the bundled `docs/` copy compiled into the binary
//!
//! Both parse with [`frontmatter::parse`] and share the fallback policy of
//! [`ContentSource::load`].

use super::{PageContent, PageSlug, frontmatter};
use crate::i18n::Locale;
use crate::log;
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

pub trait ContentSource: Send + Sync {
    /// Short description for logs (`docs/`, `embedded`).
    fn describe(&self) -> String;

    /// Read and parse the document for `slug` in `locale`.
    fn read(&self, slug: PageSlug, locale: Locale) -> Result<PageContent>;

    /// Like [`read`](Self::read), but degrades to [`PageContent::fallback`]
    /// with a warning instead of failing.
    fn load(&self, slug: PageSlug, locale: Locale) -> PageContent {
        match self.read(slug, locale) {
            Ok(content) => content,
            Err(e) => {
                log!("warning"; "failed to load content for {} ({}): {:#}", slug, locale, e);
                PageContent::fallback()
            }
        }
    }
}

/// Parse document text into page content.
fn parse_document(text: &str, name: &str) -> Result<PageContent> {
    let doc = frontmatter::parse(text).with_context(|| format!("failed to parse {name}"))?;
    Ok(PageContent::from_document(doc))
}

// ============================================================================
// Directory
// ============================================================================

/// Documents in a directory, one file per page and locale.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document for `slug` in `locale`.
    pub fn path_for(&self, slug: PageSlug, locale: Locale) -> PathBuf {
        self.root.join(slug.document(locale))
    }
}

impl ContentSource for DocumentStore {
    fn describe(&self) -> String {
        self.root().display().to_string()
    }

    fn read(&self, slug: PageSlug, locale: Locale) -> Result<PageContent> {
        let path = self.path_for(slug, locale);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        parse_document(&text, &path.display().to_string())
    }
}

// ============================================================================
// Embedded
// ============================================================================

/// Documents bundled at compile time.
static EMBEDDED: &[(&str, &str)] = &[
    (
        "landing-main-content.md",
        include_str!("../../docs/landing-main-content.md"),
    ),
    (
        "landing-main-content.en.md",
        include_str!("../../docs/landing-main-content.en.md"),
    ),
    (
        "landing-company-content.md",
        include_str!("../../docs/landing-company-content.md"),
    ),
    (
        "landing-company-content.en.md",
        include_str!("../../docs/landing-company-content.en.md"),
    ),
    (
        "landing-product-entertainment-content.md",
        include_str!("../../docs/landing-product-entertainment-content.md"),
    ),
    (
        "landing-product-entertainment-content.en.md",
        include_str!("../../docs/landing-product-entertainment-content.en.md"),
    ),
];

/// The bundled copy of `docs/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDocuments;

impl EmbeddedDocuments {
    /// Raw text of a bundled document.
    pub fn get(name: &str) -> Option<&'static str> {
        EMBEDDED
            .iter()
            .find(|(file, _)| *file == name)
            .map(|(_, text)| *text)
    }
}

impl ContentSource for EmbeddedDocuments {
    fn describe(&self) -> String {
        "embedded".to_string()
    }

    fn read(&self, slug: PageSlug, locale: Locale) -> Result<PageContent> {
        let name = slug.document(locale);
        let text = Self::get(name).ok_or_else(|| anyhow!("no embedded document `{name}`"))?;
        parse_document(text, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_has_every_document() {
        for slug in PageSlug::ALL {
            for locale in Locale::ALL {
                let content = EmbeddedDocuments.read(slug, locale).unwrap();
                assert_ne!(content.metadata.title, "", "{slug} ({locale})");
                assert!(!content.sections.is_empty(), "{slug} ({locale})");
            }
        }
    }

    #[test]
    fn test_embedded_titles_are_localized() {
        let ko = EmbeddedDocuments.load(PageSlug::Company, Locale::Ko);
        let en = EmbeddedDocuments.load(PageSlug::Company, Locale::En);
        assert_ne!(ko.metadata.title, en.metadata.title);
    }

    #[test]
    fn test_store_reads_document() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("landing-company-content.en.md"),
            "---\ntitle: Company | HEIMDEX\ndescription: About us\nvalues:\n  - Innovation\n  - Transparency\n---\n\nWe build video intelligence.\n",
        )
        .unwrap();

        let store = DocumentStore::new(dir.path());
        let content = store.load(PageSlug::Company, Locale::En);

        assert_eq!(content.metadata.title, "Company | HEIMDEX");
        assert_eq!(content.metadata.description, "About us");
        assert_eq!(
            content.sections.get("values"),
            Some(&serde_json::json!(["Innovation", "Transparency"]))
        );
        assert_eq!(content.raw, "We build video intelligence.\n");
    }

    #[test]
    fn test_store_missing_document_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path());

        assert!(store.read(PageSlug::Home, Locale::Ko).is_err());
        assert_eq!(store.load(PageSlug::Home, Locale::Ko), PageContent::fallback());
    }

    #[test]
    fn test_store_malformed_document_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("landing-main-content.en.md"),
            "+++\ntitle = \n+++\nbody",
        )
        .unwrap();

        let store = DocumentStore::new(dir.path());
        let err = store.read(PageSlug::Pricing, Locale::En).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
        assert_eq!(store.load(PageSlug::Pricing, Locale::En), PageContent::fallback());
    }

    #[test]
    fn test_store_rereads_on_every_call() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("landing-main-content.md");
        let store = DocumentStore::new(dir.path());

        fs::write(&path, "---\ntitle: One\n---\n").unwrap();
        assert_eq!(store.load(PageSlug::Home, Locale::Ko).metadata.title, "One");

        fs::write(&path, "---\ntitle: Two\n---\n").unwrap();
        assert_eq!(store.load(PageSlug::Home, Locale::Ko).metadata.title, "Two");
    }

    #[test]
    fn test_store_document_without_header() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("landing-main-content.md"), "plain text").unwrap();

        let content = DocumentStore::new(dir.path()).load(PageSlug::Contact, Locale::Ko);
        assert_eq!(content.metadata.title, "HEIMDEX");
        assert!(content.sections.is_empty());
        assert_eq!(content.raw, "plain text");
    }
}
