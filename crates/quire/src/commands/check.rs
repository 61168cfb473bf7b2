//! Config check command.

use std::path::Path;

use anyhow::Result;
use quire_versioning::list_version_paths;

/// Run the check command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = super::load(config_path)?;

    tracing::info!(
        "{} ({} sidebar groups, {} API endpoints)",
        config.metadata.name,
        config.navigation.sidebar.len(),
        config.endpoints().len()
    );

    let versions = list_version_paths(config.versioning());
    if !versions.is_empty() {
        tracing::info!("Versions: {}", versions.join(", "));
    }

    let issues = config.validate();
    for issue in &issues {
        tracing::warn!("{}", issue);
    }

    if !issues.is_empty() {
        anyhow::bail!("{} problem(s) found in {}", issues.len(), config_path.display());
    }

    tracing::info!("Config OK");

    Ok(())
}
