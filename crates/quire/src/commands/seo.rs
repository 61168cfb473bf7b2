//! Page SEO command.

use std::path::Path;

use anyhow::{Context, Result};
use quire_config::seo::{article_json_ld, breadcrumb_json_ld, canonical_url, robots_directive};
use quire_mdx::load_document;
use serde_json::json;

/// Run the seo command.
pub fn run(config_path: &Path, file: &Path, docs_dir: &Path) -> Result<()> {
    let config = super::load(config_path)?;
    let doc = load_document(file, docs_dir)?;

    let page = doc.frontmatter.seo_with_dates();
    let path = doc.url_path();
    let site_url = &config.metadata.url;
    let canonical = canonical_url(&config.seo, &page, site_url, &path);

    let mut output = json!({
        "path": path,
        "robots": robots_directive(&page),
        "canonical": canonical,
        "twitterSite": config.seo.twitter_site(),
    });

    if config.seo.json_ld_enabled() {
        let page_url = canonical.clone().unwrap_or_default();
        output["article"] = serde_json::to_value(article_json_ld(&config.seo, &page, &page_url))?;

        if config.seo.breadcrumbs_enabled() {
            output["breadcrumbs"] = serde_json::to_value(breadcrumb_json_ld(site_url, &path))?;
        }
    }

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize SEO data")?;
    println!("{}", json);

    Ok(())
}
