//! Frontmatter extraction and parsing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use quire_config::SeoFrontmatter;

use crate::last_modified::LastModified;

/// Parsed frontmatter from a content file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    /// Per-page SEO fields
    #[serde(flatten)]
    pub seo: SeoFrontmatter,

    /// File modification time (ISO 8601, UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    /// Keys this crate does not interpret, kept for the page renderer
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Frontmatter {
    /// Page title, if set.
    pub fn title(&self) -> Option<&str> {
        self.seo.title.as_deref()
    }

    /// Record the file's modification time.
    ///
    /// An unavailable time leaves the frontmatter untouched. Returns whether
    /// anything was written.
    pub fn apply_last_modified(&mut self, outcome: &LastModified) -> bool {
        match outcome.to_iso_string() {
            Some(timestamp) => {
                self.last_modified = Some(timestamp);
                true
            }
            None => false,
        }
    }

    /// SEO fields with `modifiedDate` falling back to the file time.
    pub fn seo_with_dates(&self) -> SeoFrontmatter {
        let mut seo = self.seo.clone();
        if seo.modified_date.is_none() {
            seo.modified_date = self.last_modified.clone();
        }
        seo
    }
}

/// Extract frontmatter from a content file.
///
/// Returns the parsed frontmatter and the remaining content after the frontmatter block.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    // An empty block is valid and means "no fields".
    let frontmatter = if yaml_content.is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml_content)
            .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?
    };

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_seo_fields() {
        let source = r#"---
title: Create a user
description: POST /users
keywords: [users, create]
noIndex: true
readingTime: 4
---

# Create a user
"#;

        let (fm, content) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title(), Some("Create a user"));
        assert_eq!(fm.seo.description.as_deref(), Some("POST /users"));
        assert_eq!(fm.seo.keywords, vec!["users", "create"]);
        assert!(fm.seo.no_index);
        assert_eq!(fm.seo.reading_time, Some(4));
        assert!(fm.extra.is_empty());
        assert!(content.starts_with("# Create a user"));
    }

    #[test]
    fn accepts_fractional_reading_time() {
        let (fm, _) = extract_frontmatter("---\ntitle: T\nreadingTime: 2.5\n---\nb").unwrap();

        assert_eq!(fm.unwrap().seo.reading_time, Some(3));
    }

    #[test]
    fn keeps_unknown_keys() {
        let source = "---\ntitle: Button\norder: 3\nsidebar: false\n---\nBody";

        let (fm, _) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.extra.get("order").and_then(|v| v.as_u64()), Some(3));
        assert_eq!(fm.extra.get("sidebar").and_then(|v| v.as_bool()), Some(false));
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter here.";

        let (fm, content) = extract_frontmatter(source).unwrap();

        assert!(fm.is_none());
        assert_eq!(content, source);
    }

    #[test]
    fn handles_empty_frontmatter() {
        let (fm, content) = extract_frontmatter("---\n---\nBody").unwrap();

        assert_eq!(fm, Some(Frontmatter::default()));
        assert_eq!(content, "Body");
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let source = "---\ntitle: Test\n# No closing";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let source = "---\ntitle: [invalid yaml\n---\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }

    #[test]
    fn applies_known_last_modified() {
        let mut fm = Frontmatter::default();
        let time = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();

        assert!(fm.apply_last_modified(&LastModified::Known(time)));
        assert_eq!(fm.last_modified.as_deref(), Some("2026-03-04T05:06:07.000Z"));
    }

    #[test]
    fn unavailable_last_modified_is_a_no_op() {
        let mut fm = Frontmatter {
            last_modified: Some("2020-01-01T00:00:00.000Z".to_string()),
            ..Default::default()
        };

        assert!(!fm.apply_last_modified(&LastModified::Unavailable));
        assert_eq!(fm.last_modified.as_deref(), Some("2020-01-01T00:00:00.000Z"));
    }

    #[test]
    fn explicit_modified_date_wins_over_file_time() {
        let mut fm = Frontmatter {
            last_modified: Some("2026-01-01T00:00:00.000Z".to_string()),
            ..Default::default()
        };
        assert_eq!(
            fm.seo_with_dates().modified_date.as_deref(),
            Some("2026-01-01T00:00:00.000Z")
        );

        fm.seo.modified_date = Some("2025-12-24".to_string());
        assert_eq!(fm.seo_with_dates().modified_date.as_deref(), Some("2025-12-24"));
    }

    #[test]
    fn serializes_camel_case() {
        let fm = Frontmatter {
            last_modified: Some("2026-01-01T00:00:00.000Z".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&fm).unwrap();

        assert_eq!(json, serde_json::json!({ "lastModified": "2026-01-01T00:00:00.000Z" }));
    }
}
