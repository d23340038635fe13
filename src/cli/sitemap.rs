//! `heimdex sitemap`: write sitemap.xml to a file or stdout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::generator::sitemap::Sitemap;
use crate::log;
use crate::site::Site;
use crate::utils::date::DateTimeUtc;

pub fn run_sitemap(site: &Site, output: Option<&Path>) -> Result<()> {
    let sitemap = Sitemap::build(site.base_url(), &DateTimeUtc::now().to_date());
    let count = sitemap.url_count();
    let xml = sitemap.into_xml();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, &xml)
                .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
            log!("sitemap"; "{} urls -> {}", count, path.display());
        }
        None => print!("{xml}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_writes_file_with_site_url() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("public/sitemap.xml");

        let mut config = SiteConfig::default();
        config.site.url = "https://staging.heimdex.co/".to_string();
        run_sitemap(&Site::new(config), Some(&out)).unwrap();

        let xml = fs::read_to_string(&out).unwrap();
        assert!(xml.contains("<loc>https://staging.heimdex.co/ko</loc>"));
        assert_eq!(xml.matches("<url>").count(), 10);
    }
}
