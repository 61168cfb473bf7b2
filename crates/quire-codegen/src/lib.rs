//! Request snippet generation for API documentation pages.
//!
//! Renders the same HTTP request as source text in several client idioms so
//! an endpoint page can show it in tabs.

pub mod method;
pub mod renderers;
pub mod snippet;

pub use method::{HttpMethod, ParseMethodError};
pub use snippet::{generate_all, generate_snippet, CodeGenOptions, SnippetLanguage};
