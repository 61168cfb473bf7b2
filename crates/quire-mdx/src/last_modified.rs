//! Best-effort file modification times.

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

/// Outcome of a last-modified lookup.
///
/// `Unavailable` is an expected result (missing file, platform without
/// mtimes), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastModified {
    Known(DateTime<Utc>),
    Unavailable,
}

impl LastModified {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// ISO 8601 with millisecond precision and a `Z` suffix.
    pub fn to_iso_string(&self) -> Option<String> {
        match self {
            Self::Known(time) => Some(time.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Unavailable => None,
        }
    }
}

/// Look up when a file was last modified. Never fails.
pub fn last_modified(path: &Path) -> LastModified {
    match fs::metadata(path).and_then(|meta| meta.modified()) {
        Ok(time) => LastModified::Known(DateTime::<Utc>::from(time)),
        Err(e) => {
            tracing::debug!("No modification time for {}: {}", path.display(), e);
            LastModified::Unavailable
        }
    }
}
