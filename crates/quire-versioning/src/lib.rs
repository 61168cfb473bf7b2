//! Version-aware path resolution for documentation sites.
//!
//! Every function here is pure: the versioning configuration is passed in
//! explicitly, so the same resolution runs identically at build time and at
//! redirect time.

pub mod resolver;
pub mod version;

pub use resolver::{
    banner_for_path, build_versioned_path, format_banner_message, get_default_version,
    is_default_version, is_versioned_path, list_version_paths, resolve_version_from_path,
    strip_version_prefix,
};
pub use version::{Version, VersionBanner, VersioningConfig, VersioningIssue};
