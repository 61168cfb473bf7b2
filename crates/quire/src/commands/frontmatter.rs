//! Frontmatter dump command.

use std::path::Path;

use anyhow::{Context, Result};
use quire_mdx::{scan_docs, Frontmatter};
use serde::Serialize;

#[derive(Serialize)]
struct PageEntry<'a> {
    path: String,
    url: String,
    frontmatter: &'a Frontmatter,
}

/// Run the frontmatter command.
pub fn run(dir: &Path) -> Result<()> {
    let documents = scan_docs(dir)?;

    let entries: Vec<PageEntry<'_>> = documents
        .iter()
        .map(|doc| PageEntry {
            path: doc.relative_path.display().to_string(),
            url: doc.url_path(),
            frontmatter: &doc.frontmatter,
        })
        .collect();

    let missing = documents
        .iter()
        .filter(|doc| doc.frontmatter.last_modified.is_none())
        .count();
    if missing > 0 {
        tracing::debug!("{} page(s) without a modification time", missing);
    }

    let json = serde_json::to_string_pretty(&entries).context("Failed to serialize frontmatter")?;
    println!("{}", json);

    tracing::info!("Scanned {} pages in {}", documents.len(), dir.display());

    Ok(())
}
