//! URL path to static file resolution.

use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// URL prefix under which the static directory is also mounted.
const STATIC_PREFIX: &str = "/static";

/// Resolve a request path to a file under `static_root`.
///
/// `/static/logo.svg` and `/logo.svg` both map to `static_root/logo.svg`.
/// Paths that decode to `..` segments or resolve outside the root are rejected.
pub fn resolve_static(path: &str, static_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(path)?;
    if clean.is_empty() || clean.split('/').any(|seg| seg == "..") {
        return None;
    }

    let local = static_root.join(&clean);

    let canonical = local.canonicalize().ok()?;
    let root_canonical = static_root.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Decode, strip the query and the static mount, trim slashes.
fn normalize_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let decoded = percent_decode_str(path).decode_utf8().ok()?;

    let unmounted = match decoded.strip_prefix(STATIC_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => decoded.as_ref(),
    };

    if unmounted.contains('\\') || unmounted.contains('\0') {
        return None;
    }
    Some(unmounted.trim_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("static");
        fs::create_dir_all(root.join("img")).unwrap();
        fs::write(root.join("favicon.ico"), b"ico").unwrap();
        fs::write(root.join("img/logo 1.svg"), b"<svg/>").unwrap();
        fs::write(dir.path().join("secret.txt"), b"no").unwrap();
        (dir, root)
    }

    #[test]
    fn test_resolves_root_and_mounted_paths() {
        let (_dir, root) = fixture();

        let direct = resolve_static("/favicon.ico", &root).unwrap();
        let mounted = resolve_static("/static/favicon.ico?v=2", &root).unwrap();
        assert_eq!(direct, mounted);
        assert!(resolve_static("/static/img/logo%201.svg", &root).is_some());
    }

    #[test]
    fn test_rejects_traversal() {
        let (_dir, root) = fixture();

        assert!(resolve_static("/../secret.txt", &root).is_none());
        assert!(resolve_static("/static/%2e%2e/secret.txt", &root).is_none());
        assert!(resolve_static("/img/..%5csecret.txt", &root).is_none());
    }

    #[test]
    fn test_directories_and_missing_files() {
        let (_dir, root) = fixture();

        assert!(resolve_static("/img", &root).is_none());
        assert!(resolve_static("/static", &root).is_none());
        assert!(resolve_static("/missing.png", &root).is_none());
        assert!(resolve_static("/favicon.ico", &root.join("nope")).is_none());
    }

    #[test]
    fn test_static_prefix_needs_segment_boundary() {
        assert_eq!(normalize_url("/statics/a.css").as_deref(), Some("statics/a.css"));
        assert_eq!(normalize_url("/static/a.css").as_deref(), Some("a.css"));
    }
}
