//! Version definitions and versioning configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A documentation version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Version {
    /// Stable key used for equality and default matching
    pub id: String,

    /// Display text
    pub label: String,

    /// URL segment used for routing (unique across the version set)
    pub path: String,

    /// Advisory only
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

impl Version {
    /// Create a non-deprecated version.
    pub fn new(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: path.into(),
            deprecated: false,
        }
    }
}

/// Banner shown on pages of non-default versions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VersionBanner {
    pub enabled: bool,

    /// Template with `{version}` and `{latest}` placeholders
    pub message: String,
}

/// The `versioning` section of a site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersioningConfig {
    pub enabled: bool,

    /// Id of the canonical, un-prefixed version
    #[serde(default)]
    pub default_version: String,

    #[serde(default)]
    pub versions: Vec<Version>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_banner: Option<VersionBanner>,
}

impl VersioningConfig {
    /// Whether resolution is active: enabled with at least one version.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.versions.is_empty()
    }

    /// Find a version by its stable id.
    pub fn find_by_id(&self, id: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// Find a version by its URL segment.
    pub fn find_by_path(&self, path: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.path == path)
    }

    /// Report authoring mistakes the resolver silently tolerates.
    ///
    /// Resolution never calls this; it exists for tooling that wants to warn.
    pub fn validate(&self) -> Vec<VersioningIssue> {
        let mut issues = Vec::new();

        if !self.enabled {
            return issues;
        }

        if self.versions.is_empty() {
            issues.push(VersioningIssue::NoVersions);
            return issues;
        }

        if self.find_by_id(&self.default_version).is_none() {
            issues.push(VersioningIssue::UnknownDefault {
                id: self.default_version.clone(),
                fallback: self.versions[0].id.clone(),
            });
        }

        let mut seen_paths = HashSet::new();
        let mut seen_ids = HashSet::new();
        for version in &self.versions {
            if !seen_paths.insert(version.path.as_str()) {
                issues.push(VersioningIssue::DuplicatePath(version.path.clone()));
            }
            if !seen_ids.insert(version.id.as_str()) {
                issues.push(VersioningIssue::DuplicateId(version.id.clone()));
            }
        }

        issues
    }
}

/// A configuration problem found by [`VersioningConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersioningIssue {
    #[error("Versioning is enabled but no versions are configured")]
    NoVersions,

    #[error("Default version '{id}' matches no version id; '{fallback}' is used instead")]
    UnknownDefault { id: String, fallback: String },

    #[error("Version path '{0}' is used more than once; only the first entry is reachable")]
    DuplicatePath(String),

    #[error("Version id '{0}' is used more than once")]
    DuplicateId(String),
}
