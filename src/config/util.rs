//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// ```text
/// /home/user/site/docs/    ← cwd
/// /home/user/site/heimdex.toml  ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

/// Parse an absolute `http`/`https` URL with a host.
///
/// Returns a message suitable for a diagnostic on failure.
pub fn check_http_url(url_str: &str) -> Result<url::Url, String> {
    let parsed = url::Url::parse(url_str).map_err(|e| format!("invalid URL: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".to_string());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_from_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/drafts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("heimdex.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("heimdex.toml")).unwrap();
        assert_eq!(found, dir.path().join("heimdex.toml"));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("heimdex.toml")).unwrap();

        let found = find_config_from(dir.path(), Path::new("heimdex.toml"));
        assert_ne!(found, Some(dir.path().join("heimdex.toml")));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file(&path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }

    #[test]
    fn test_check_http_url() {
        assert!(check_http_url("https://heimdex.co").is_ok());
        assert!(check_http_url("http://localhost:5277/").is_ok());

        assert!(check_http_url("heimdex.co").unwrap_err().contains("invalid URL"));
        assert!(check_http_url("ftp://heimdex.co").unwrap_err().contains("scheme"));
    }
}
