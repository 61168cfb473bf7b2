pub mod check;
pub mod frontmatter;
pub mod seo;
pub mod snippet;
pub mod version;

use std::path::Path;

use anyhow::{Context, Result};
use quire_config::{load_config, DocsConfig};

/// Load the site config, attaching the path to any error.
pub fn load(config_path: &Path) -> Result<DocsConfig> {
    load_config(config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))
}
