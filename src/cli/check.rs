//! `heimdex check`: every page document loads, pricing copy lines up.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use crate::content::{PageSlug, pricing};
use crate::i18n::Locale;
use crate::log;
use crate::site::Site;

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub target: String,
    pub reason: String,
}

/// Findings grouped by document (or `pricing`).
#[derive(Debug, Default)]
pub struct CheckReport {
    pub errors: BTreeMap<String, Vec<Finding>>,
    pub warnings: BTreeMap<String, Vec<Finding>>,
}

impl CheckReport {
    pub fn add_error(&mut self, source: &str, target: String, reason: String) {
        self.errors
            .entry(source.to_string())
            .or_default()
            .push(Finding { target, reason });
    }

    pub fn add_warning(&mut self, source: &str, target: String, reason: String) {
        self.warnings
            .entry(source.to_string())
            .or_default()
            .push(Finding { target, reason });
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.values().map(Vec::len).sum()
    }

    /// Print errors, then warnings, to stderr.
    pub fn print(&self) {
        print_section("errors", &self.errors);
        print_section("warnings", &self.warnings);
    }
}

fn print_section(name: &str, findings: &BTreeMap<String, Vec<Finding>>) {
    if findings.is_empty() {
        return;
    }
    eprintln!();

    let count: usize = findings.values().map(Vec::len).sum();
    let header = if name == "errors" {
        name.red().bold().to_string()
    } else {
        name.yellow().bold().to_string()
    };
    eprintln!("{} {}", header, format!("({count})").dimmed());

    for (source, items) in findings {
        eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
        for item in items {
            eprintln!("{} {} {}", "→".red(), item.target, item.reason);
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors == 0 && warnings == 0 {
            return write!(f, "{}", "all checks passed".green());
        }
        write!(
            f,
            "{} {} {}, {} {}",
            "found".dimmed(),
            errors.to_string().red().bold(),
            plural(errors, "error").dimmed(),
            warnings.to_string().yellow().bold(),
            plural(warnings, "warning").dimmed()
        )
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 { word.to_string() } else { format!("{word}s") }
}

/// Run every check against the site's content source.
pub fn collect(site: &Site) -> CheckReport {
    let mut report = CheckReport::default();
    let source = site.content.source();
    let mut seen = HashSet::new();

    for locale in Locale::ALL {
        for slug in PageSlug::ALL {
            let document = slug.document(locale);
            if !seen.insert(document) {
                continue;
            }

            match source.read(slug, locale) {
                Ok(content) if !content.sections.contains_key("title") => report.add_warning(
                    document,
                    format!("`{locale}`"),
                    "no title, pages show the default".to_string(),
                ),
                Ok(_) => {}
                Err(e) => report.add_error(document, format!("`{locale}`"), format!("{e:#}")),
            }
        }
    }

    for issue in pricing::parity_issues(site.content.pricing_table()) {
        report.add_error("pricing", "ko/en".to_string(), issue);
    }

    report
}

pub fn run_check(site: &Site, warn_only: bool) -> Result<()> {
    log!("check"; "checking content from {}", site.content.source().describe());

    let report = collect(site);
    report.print();
    log!("check"; "{}", report);

    if report.error_count() > 0 && !warn_only {
        bail!("check failed with {}", plural(report.error_count(), "error"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, SourceKind};
    use std::fs;
    use tempfile::TempDir;

    fn directory_site(dir: &TempDir) -> Site {
        let mut config = SiteConfig::default();
        config.content.source = SourceKind::Directory;
        config.content.dir = dir.path().to_path_buf();
        Site::new(config)
    }

    #[test]
    fn test_embedded_content_passes() {
        let site = Site::new(SiteConfig::default());
        let report = collect(&site);

        assert_eq!(report.error_count(), 0, "{:?}", report.errors);
        assert!(run_check(&site, false).is_ok());
    }

    #[test]
    fn test_missing_documents_are_errors() {
        let dir = TempDir::new().unwrap();
        let site = directory_site(&dir);
        let report = collect(&site);

        // three distinct documents per locale
        assert_eq!(report.error_count(), 6);
        assert!(report.errors.contains_key("landing-main-content.en.md"));
        assert!(run_check(&site, false).is_err());
        assert!(run_check(&site, true).is_ok());
    }

    #[test]
    fn test_untitled_document_is_warning() {
        let dir = TempDir::new().unwrap();
        for locale in Locale::ALL {
            for slug in PageSlug::ALL {
                fs::write(dir.path().join(slug.document(locale)), "---\ntitle: T\n---\nbody").unwrap();
            }
        }
        fs::write(dir.path().join("landing-company-content.md"), "no header").unwrap();

        let report = collect(&directory_site(&dir));
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 1);
        assert!(report.warnings.contains_key("landing-company-content.md"));
    }

    #[test]
    fn test_report_summary() {
        let mut report = CheckReport::default();
        assert!(report.to_string().contains("all checks passed"));

        report.add_error("pricing", "ko/en".to_string(), "mismatch".to_string());
        let summary = report.to_string();
        assert!(summary.contains("error"));
        assert!(!summary.contains("errors"));
    }
}
