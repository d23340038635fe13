//! `[content]` section configuration.
//!
//! ```toml
//! [content]
//! source = "directory"   # or "embedded" (default): documents bundled in the binary
//! dir = "docs"           # document directory, relative to heimdex.toml
//! static_dir = "static"  # files served as is
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::content::{ContentSource, DocumentStore, EmbeddedDocuments};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where page documents are read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The copy compiled into the binary.
    #[default]
    Embedded,
    /// Files in `dir`, re-read on every request.
    Directory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub source: SourceKind,
    pub dir: PathBuf,
    pub static_dir: PathBuf,
}

pub struct ContentFields {
    pub source: FieldPath,
    pub dir: FieldPath,
    pub static_dir: FieldPath,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Embedded,
            dir: "docs".into(),
            static_dir: "static".into(),
        }
    }
}

impl ContentConfig {
    pub const FIELDS: ContentFields = ContentFields {
        source: FieldPath::new("content.source"),
        dir: FieldPath::new("content.dir"),
        static_dir: FieldPath::new("content.static_dir"),
    };

    /// Make relative paths absolute against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.dir = crate::utils::path::normalize_path(&root.join(&self.dir));
        self.static_dir = crate::utils::path::normalize_path(&root.join(&self.static_dir));
    }

    /// The configured page document source.
    pub fn open(&self) -> Box<dyn ContentSource> {
        match self.source {
            SourceKind::Embedded => Box::new(EmbeddedDocuments),
            SourceKind::Directory => Box::new(DocumentStore::new(&self.dir)),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.source == SourceKind::Directory && !self.dir.is_dir() {
            diag.error_with_hint(
                Self::FIELDS.dir,
                format!("content directory `{}` does not exist", self.dir.display()),
                format!("create it or set {} = \"embedded\"", Self::FIELDS.source),
            );
        }
        if self.static_dir.exists() && !self.static_dir.is_dir() {
            diag.error(
                Self::FIELDS.static_dir,
                format!("`{}` is not a directory", self.static_dir.display()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_content_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.content.source, SourceKind::Embedded);
        assert_eq!(config.content.dir, PathBuf::from("docs"));
        assert_eq!(config.content.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_source_kind_parsing() {
        let config = test_parse_config("[content]\nsource = \"directory\"\ndir = \"content\"");
        assert_eq!(config.content.source, SourceKind::Directory);
        assert_eq!(config.content.dir, PathBuf::from("content"));

        let result: Result<ContentConfig, _> = toml::from_str("source = \"s3\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_relative_to_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();

        let mut content = ContentConfig::default();
        content.normalize(dir.path());

        assert!(content.dir.is_absolute());
        assert!(content.dir.ends_with("docs"));
        assert!(content.static_dir.ends_with("static"));
    }

    #[test]
    fn test_validate_missing_directory() {
        let dir = TempDir::new().unwrap();
        let mut content = ContentConfig {
            source: SourceKind::Directory,
            ..ContentConfig::default()
        };
        content.normalize(dir.path());

        let mut diag = ConfigDiagnostics::new();
        content.validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "content.dir");

        fs::create_dir(dir.path().join("docs")).unwrap();
        let mut diag = ConfigDiagnostics::new();
        content.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_embedded_skips_directory_check() {
        let dir = TempDir::new().unwrap();
        let mut content = ContentConfig::default();
        content.normalize(dir.path());

        let mut diag = ConfigDiagnostics::new();
        content.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_open_describes_source() {
        assert_eq!(ContentConfig::default().open().describe(), "embedded");

        let content = ContentConfig {
            source: SourceKind::Directory,
            dir: "/srv/docs".into(),
            ..ContentConfig::default()
        };
        assert_eq!(content.open().describe(), "/srv/docs");
    }
}
