//! SEO defaults, per-page overrides and schema.org structured data.

use serde::{Deserialize, Deserializer, Serialize};

use crate::schema::SiteMetadata;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Article flavour used for documentation pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ArticleType {
    #[default]
    TechArticle,
    Article,
}

/// Open Graph object type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    Website,
    #[default]
    Article,
    Profile,
    Book,
}

/// Site-wide SEO defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoConfig {
    /// Open Graph image for pages without their own
    pub og_image: String,

    pub twitter_handle: String,

    /// Defaults to `twitter_handle`
    pub twitter_site: Option<String>,

    pub default_author: Option<String>,

    pub default_keywords: Vec<String>,

    pub enable_json_ld: Option<bool>,

    pub organization_name: Option<String>,

    pub organization_logo: Option<String>,

    pub article_type: ArticleType,

    pub auto_canonical: Option<bool>,

    pub enable_breadcrumbs: Option<bool>,
}

impl SeoConfig {
    pub fn json_ld_enabled(&self) -> bool {
        self.enable_json_ld.unwrap_or(true)
    }

    pub fn breadcrumbs_enabled(&self) -> bool {
        self.enable_breadcrumbs.unwrap_or(true)
    }

    pub fn auto_canonical(&self) -> bool {
        self.auto_canonical.unwrap_or(true)
    }

    /// Handle for the `twitter:site` tag.
    pub fn twitter_site(&self) -> &str {
        self.twitter_site.as_deref().unwrap_or(&self.twitter_handle)
    }
}

/// SEO fields a page may set in its frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoFrontmatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_type: Option<OgType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_index: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_follow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// ISO 8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    /// ISO 8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Minutes, fractional values rounded up
    #[serde(
        deserialize_with = "whole_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub reading_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

fn whole_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let minutes = Option::<f64>::deserialize(deserializer)?;
    Ok(minutes.map(|m| m.max(0.0).ceil() as u32))
}

/// Content of the `robots` meta tag for a page.
pub fn robots_directive(page: &SeoFrontmatter) -> String {
    format!(
        "{}, {}",
        if page.no_index { "noindex" } else { "index" },
        if page.no_follow { "nofollow" } else { "follow" }
    )
}

/// Canonical URL for a page at `path`, if one should be emitted.
pub fn canonical_url(
    seo: &SeoConfig,
    page: &SeoFrontmatter,
    site_url: &str,
    path: &str,
) -> Option<String> {
    if let Some(canonical) = &page.canonical {
        return Some(canonical.clone());
    }

    if !seo.auto_canonical() || site_url.is_empty() {
        return None;
    }

    Some(join_url(site_url, path))
}

fn join_url(site_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        site_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

/// schema.org `TechArticle` / `Article`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: ArticleType,
    pub headline: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_entity_of_page: Option<WebPageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_section: Option<String>,
}

/// schema.org `WebSite`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebsiteJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Organization>,
}

/// schema.org `BreadcrumbList`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

fn publisher(seo: &SeoConfig) -> Option<Organization> {
    seo.organization_name.as_ref().map(|name| Organization {
        kind: "Organization",
        name: name.clone(),
        logo: seo.organization_logo.as_ref().map(|url| ImageObject {
            kind: "ImageObject",
            url: url.clone(),
        }),
    })
}

/// Article structured data for a page. Page fields win over site defaults.
pub fn article_json_ld(seo: &SeoConfig, page: &SeoFrontmatter, page_url: &str) -> ArticleJsonLd {
    let author = page
        .author
        .as_ref()
        .or(seo.default_author.as_ref())
        .map(|name| Person {
            kind: "Person",
            name: name.clone(),
        });

    let image = page
        .og_image
        .clone()
        .or_else(|| Some(seo.og_image.clone()).filter(|i| !i.is_empty()));

    let keywords = if page.keywords.is_empty() {
        &seo.default_keywords
    } else {
        &page.keywords
    };

    ArticleJsonLd {
        context: SCHEMA_CONTEXT,
        kind: seo.article_type,
        headline: page.title.clone().unwrap_or_default(),
        description: page.description.clone().unwrap_or_default(),
        author,
        date_published: page.publish_date.clone(),
        date_modified: page.modified_date.clone(),
        publisher: publisher(seo),
        main_entity_of_page: (!page_url.is_empty()).then(|| WebPageRef {
            kind: "WebPage",
            id: page_url.to_string(),
        }),
        image,
        keywords: (!keywords.is_empty()).then(|| keywords.join(", ")),
        article_section: page.section.clone(),
    }
}

/// Website structured data for the landing page.
pub fn website_json_ld(metadata: &SiteMetadata, seo: &SeoConfig) -> WebsiteJsonLd {
    WebsiteJsonLd {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        name: metadata.name.clone(),
        description: metadata.description.clone(),
        url: metadata.url.clone(),
        publisher: publisher(seo),
    }
}

/// Breadcrumb trail for a page path, starting at the site root.
///
/// The last crumb is the current page and carries no link.
pub fn breadcrumb_json_ld(site_url: &str, path: &str) -> BreadcrumbJsonLd {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut items = vec![ListItem {
        kind: "ListItem",
        position: 1,
        name: "Home".to_string(),
        item: (!segments.is_empty()).then(|| join_url(site_url, "")),
    }];

    for (i, segment) in segments.iter().enumerate() {
        let is_last = i + 1 == segments.len();
        items.push(ListItem {
            kind: "ListItem",
            position: i + 2,
            name: title_case(segment),
            item: (!is_last).then(|| join_url(site_url, &segments[..=i].join("/"))),
        });
    }

    BreadcrumbJsonLd {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: items,
    }
}

/// `getting-started` -> `Getting Started`
fn title_case(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
