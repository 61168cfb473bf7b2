//! Snippet language selection and request options.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::method::HttpMethod;
use crate::renderers;

/// The request a snippet describes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeGenOptions {
    pub method: HttpMethod,

    /// Endpoint path, appended verbatim to `base_url`
    pub path: String,

    pub base_url: String,

    /// Request headers, rendered in insertion order
    #[serde(default)]
    pub headers: IndexMap<String, String>,

    /// Pre-serialized request body, never parsed
    #[serde(default)]
    pub body: Option<String>,
}

impl CodeGenOptions {
    /// Create options for a request without headers or body.
    pub fn new(method: HttpMethod, base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            base_url: base_url.into(),
            headers: IndexMap::new(),
            body: None,
        }
    }

    /// Add a header. A repeated name keeps its original position.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Full request URL.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    /// The body to embed, if the method carries one and it is non-empty.
    pub fn request_body(&self) -> Option<&str> {
        self.body
            .as_deref()
            .filter(|b| !b.is_empty() && self.method.has_body())
    }
}

/// Target syntax of a generated snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SnippetLanguage {
    /// Shell command line
    #[default]
    Curl,
    /// Browser `fetch` call
    JavaScript,
    /// `requests` client call
    Python,
    /// `net/http` program
    Go,
}

impl SnippetLanguage {
    /// Every language, in tab order.
    pub const ALL: [SnippetLanguage; 4] = [
        SnippetLanguage::Curl,
        SnippetLanguage::JavaScript,
        SnippetLanguage::Python,
        SnippetLanguage::Go,
    ];

    /// Select a language by tag. Unknown tags fall back to curl.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "curl" => Self::Curl,
            "javascript" => Self::JavaScript,
            "python" => Self::Python,
            "go" => Self::Go,
            _ => Self::default(),
        }
    }

    /// Tag accepted by [`SnippetLanguage::from_tag`].
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Curl => "curl",
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Go => "go",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Curl => "cURL",
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Go => "Go",
        }
    }

    /// Render the request in this language.
    pub fn render(&self, opts: &CodeGenOptions) -> String {
        match self {
            Self::Curl => renderers::curl(opts),
            Self::JavaScript => renderers::javascript(opts),
            Self::Python => renderers::python(opts),
            Self::Go => renderers::go(opts),
        }
    }
}

/// Render a request snippet for a language tag.
pub fn generate_snippet(tag: &str, opts: &CodeGenOptions) -> String {
    SnippetLanguage::from_tag(tag).render(opts)
}

/// Render the request in every language, in tab order.
pub fn generate_all(opts: &CodeGenOptions) -> Vec<(SnippetLanguage, String)> {
    SnippetLanguage::ALL
        .into_iter()
        .map(|lang| (lang, lang.render(opts)))
        .collect()
}
