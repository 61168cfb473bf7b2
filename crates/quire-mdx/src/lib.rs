//! Frontmatter handling for quire content files.
//!
//! Extracts YAML frontmatter from Markdown/MDX sources and enriches it with
//! data the author should not have to maintain by hand: the file's
//! last-modified time and an estimated reading time.

pub mod frontmatter;
pub mod last_modified;
pub mod reading_time;
pub mod scan;

pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use last_modified::{last_modified, LastModified};
pub use reading_time::estimate_reading_time;
pub use scan::{load_document, scan_docs, Document, ScanError};
