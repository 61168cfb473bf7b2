//! Versioned path commands.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use quire_versioning::{
    banner_for_path, build_versioned_path, is_default_version, is_versioned_path,
    list_version_paths, resolve_version_from_path, strip_version_prefix,
};

#[derive(Subcommand)]
pub enum VersionCommand {
    /// Show which version a path belongs to
    Resolve { path: String },

    /// Remove the version prefix from a path
    Strip { path: String },

    /// Rewrite a path to point at another version
    Build {
        path: String,

        /// Target version id
        #[arg(short, long)]
        to: String,
    },

    /// List configured version paths
    List,

    /// Print the version banner for a path, if any
    Banner { path: String },
}

/// Run a version subcommand.
pub fn run(config_path: &Path, command: VersionCommand) -> Result<()> {
    let config = super::load(config_path)?;
    let versioning = config.versioning();

    if !versioning.is_some_and(|v| v.is_active()) {
        tracing::warn!("Versioning is not enabled in {}", config_path.display());
    }

    match command {
        VersionCommand::Resolve { path } => match resolve_version_from_path(&path, versioning) {
            Some(version) => {
                let explicit = is_versioned_path(&path, versioning);
                println!(
                    "{} ({}){}{}",
                    version.label,
                    version.id,
                    if is_default_version(Some(version), versioning) {
                        " [default]"
                    } else {
                        ""
                    },
                    if explicit { "" } else { " [implicit]" }
                );
                if version.deprecated {
                    tracing::warn!("Version {} is deprecated", version.id);
                }
            }
            None => println!("unversioned"),
        },
        VersionCommand::Strip { path } => {
            println!("{}", strip_version_prefix(&path, versioning));
        }
        VersionCommand::Build { path, to } => {
            let target = versioning
                .and_then(|v| v.find_by_id(&to))
                .with_context(|| format!("Unknown version id: {}", to))?;
            println!("{}", build_versioned_path(&path, target, versioning));
        }
        VersionCommand::List => {
            for path in list_version_paths(versioning) {
                println!("{}", path);
            }
        }
        VersionCommand::Banner { path } => {
            if let Some(message) = banner_for_path(&path, versioning) {
                println!("{}", message);
            }
        }
    }

    Ok(())
}
