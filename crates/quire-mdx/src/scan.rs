//! Docs directory scanning.
//!
//! Walks a content directory, parses each page's frontmatter and applies the
//! enrichments a build would: last-modified time and reading time.

use std::fs;
use std::path::{Component, Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
use crate::last_modified::last_modified;
use crate::reading_time::estimate_reading_time;

/// A content file with enriched frontmatter.
#[derive(Debug, Clone)]
pub struct Document {
    /// Source file path
    pub source_path: PathBuf,

    /// Path relative to the docs directory
    pub relative_path: PathBuf,

    /// Frontmatter, empty when the file has none
    pub frontmatter: Frontmatter,

    /// Content after the frontmatter block
    pub content: String,
}

impl Document {
    /// Site path the page is served at.
    ///
    /// `guide/intro.mdx` maps to `/guide/intro`, `guide/index.md` to `/guide`.
    pub fn url_path(&self) -> String {
        let stem = self
            .relative_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("index");

        let mut segments: Vec<String> = self
            .relative_path
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .filter_map(|c| match c {
                        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        if stem != "index" {
            segments.push(stem.to_string());
        }

        format!("/{}", segments.join("/"))
    }
}

/// Errors that can occur while scanning docs.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Docs directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },
}

/// Load one content file and enrich its frontmatter.
///
/// `docs_dir` is only used to compute the relative path.
pub fn load_document(path: &Path, docs_dir: &Path) -> Result<Document, ScanError> {
    let source = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (frontmatter, content) =
        extract_frontmatter(&source).map_err(|source| ScanError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;

    let mut frontmatter = frontmatter.unwrap_or_default();
    frontmatter.apply_last_modified(&last_modified(path));
    if frontmatter.seo.reading_time.is_none() {
        frontmatter.seo.reading_time = Some(estimate_reading_time(content));
    }

    let relative_path = relative_to(path, docs_dir);

    Ok(Document {
        source_path: path.to_path_buf(),
        relative_path,
        frontmatter,
        content: content.to_string(),
    })
}

/// Path of `path` inside `docs_dir`.
///
/// Compares lexically first, then through the canonical paths. A file outside
/// `docs_dir` keeps its own normal components.
fn relative_to(path: &Path, docs_dir: &Path) -> PathBuf {
    if let Some(relative) = strip_dir(path, docs_dir) {
        return relative;
    }

    if let (Ok(path), Ok(docs_dir)) = (path.canonicalize(), docs_dir.canonicalize()) {
        if let Some(relative) = strip_dir(&path, &docs_dir) {
            return relative;
        }
    }

    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

/// Lexical prefix strip ignoring `.` components. Gives up on `..`.
fn strip_dir(path: &Path, dir: &Path) -> Option<PathBuf> {
    if path.has_root() != dir.has_root() {
        return None;
    }

    fn significant(p: &Path) -> Option<Vec<Component<'_>>> {
        let mut parts = Vec::new();
        for c in p.components() {
            match c {
                Component::CurDir => {}
                Component::ParentDir => return None,
                other => parts.push(other),
            }
        }
        Some(parts)
    }

    let path_parts = significant(path)?;
    let dir_parts = significant(dir)?;

    if path_parts.len() <= dir_parts.len() || !path_parts.starts_with(&dir_parts) {
        return None;
    }

    Some(path_parts[dir_parts.len()..].iter().collect())
}

/// Find and load every `.md` and `.mdx` file under `docs_dir`.
///
/// Documents are returned sorted by relative path.
pub fn scan_docs(docs_dir: &Path) -> Result<Vec<Document>, ScanError> {
    if !docs_dir.is_dir() {
        return Err(ScanError::DirectoryNotFound(docs_dir.to_path_buf()));
    }

    let paths: Vec<PathBuf> = WalkDir::new(docs_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .filter(|p| {
            matches!(
                p.extension().and_then(|e| e.to_str()),
                Some("md") | Some("mdx")
            )
        })
        .collect();

    tracing::debug!("Found {} content files in {}", paths.len(), docs_dir.display());

    let mut documents = paths
        .par_iter()
        .map(|path| load_document(path, docs_dir))
        .collect::<Result<Vec<_>, _>>()?;

    documents.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(documents)
}
