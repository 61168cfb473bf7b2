//! Path resolution against a versioning configuration.
//!
//! An absent config, a disabled config and a config without versions all
//! behave the same way: nothing is versioned and paths pass through as given.

use crate::version::{Version, VersioningConfig};

/// The config, if it is enabled and has at least one version.
fn active(config: Option<&VersioningConfig>) -> Option<&VersioningConfig> {
    config.filter(|c| c.is_active())
}

/// Split a path into its first segment and the rest, ignoring outer slashes.
fn split_first_segment(path: &str) -> (&str, Option<&str>) {
    let clean = path.trim_matches('/');
    match clean.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (clean, None),
    }
}

/// Determine which version a URL path belongs to.
///
/// A path whose first segment is not a version path resolves to the default
/// version, so every active config resolves every path to some version.
pub fn resolve_version_from_path<'a>(
    path: &str,
    config: Option<&'a VersioningConfig>,
) -> Option<&'a Version> {
    let cfg = active(config)?;
    let (first, _) = split_first_segment(path);

    cfg.find_by_path(first)
        .or_else(|| get_default_version(Some(cfg)))
}

/// The configured default version, or the first version if the default id
/// matches nothing.
pub fn get_default_version(config: Option<&VersioningConfig>) -> Option<&Version> {
    let cfg = active(config)?;

    cfg.find_by_id(&cfg.default_version)
        .or_else(|| cfg.versions.first())
}

/// Whether the first path segment is a configured version path.
pub fn is_versioned_path(path: &str, config: Option<&VersioningConfig>) -> bool {
    let Some(cfg) = active(config) else {
        return false;
    };
    let (first, _) = split_first_segment(path);

    cfg.find_by_path(first).is_some()
}

/// Remove a leading version segment from a path.
///
/// The result always starts with a single `/`. Paths without a version
/// prefix are returned exactly as given.
pub fn strip_version_prefix(path: &str, config: Option<&VersioningConfig>) -> String {
    let Some(cfg) = active(config) else {
        return path.to_string();
    };
    let (first, rest) = split_first_segment(path);

    if cfg.find_by_path(first).is_some() {
        format!("/{}", rest.unwrap_or(""))
    } else {
        path.to_string()
    }
}

/// Rewrite a path so it points at `target`.
///
/// The default version is canonical and never carries a prefix.
pub fn build_versioned_path(
    path: &str,
    target: &Version,
    config: Option<&VersioningConfig>,
) -> String {
    let Some(cfg) = config.filter(|c| c.enabled) else {
        return path.to_string();
    };

    let within = strip_version_prefix(path, Some(cfg));
    let inner = within.trim_matches('/');

    let is_default = get_default_version(Some(cfg)).is_some_and(|d| d.id == target.id);
    if is_default {
        return format!("/{}", inner);
    }

    let prefixed = format!("/{}/{}", target.path, inner);
    match prefixed.trim_end_matches('/') {
        "" => "/".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Whether `version` is the configured default.
///
/// Without an enabled config or a current version, everything counts as
/// default. Unlike [`get_default_version`] there is no first-version fallback.
pub fn is_default_version(version: Option<&Version>, config: Option<&VersioningConfig>) -> bool {
    match (version, config.filter(|c| c.enabled)) {
        (Some(version), Some(cfg)) => version.id == cfg.default_version,
        _ => true,
    }
}

/// Fill the `{version}` and `{latest}` placeholders of a banner template.
///
/// Only the first occurrence of each placeholder is replaced.
pub fn format_banner_message(
    template: &str,
    current: &Version,
    fallback_default: Option<&Version>,
) -> String {
    let latest = fallback_default
        .map(|v| v.label.as_str())
        .filter(|label| !label.is_empty())
        .unwrap_or("latest");

    template
        .replacen("{version}", &current.label, 1)
        .replacen("{latest}", latest, 1)
}

/// Every configured version path, in configured order.
pub fn list_version_paths(config: Option<&VersioningConfig>) -> Vec<&str> {
    active(config)
        .map(|cfg| cfg.versions.iter().map(|v| v.path.as_str()).collect())
        .unwrap_or_default()
}

/// Banner text for a page, if one should be shown.
///
/// Pages of the default version never get a banner.
pub fn banner_for_path(path: &str, config: Option<&VersioningConfig>) -> Option<String> {
    let cfg = active(config)?;
    let banner = cfg.version_banner.as_ref().filter(|b| b.enabled)?;
    let current = resolve_version_from_path(path, Some(cfg))?;

    if is_default_version(Some(current), Some(cfg)) {
        return None;
    }

    Some(format_banner_message(
        &banner.message,
        current,
        get_default_version(Some(cfg)),
    ))
}
