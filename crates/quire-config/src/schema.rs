//! Configuration schema.
//!
//! Keys are camelCase on the wire. Only `metadata` is required; every other
//! section falls back to its defaults.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use quire_codegen::HttpMethod;
use quire_versioning::{VersioningConfig, VersioningIssue};

use crate::seo::SeoConfig;

/// Root of a site configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsConfig {
    pub metadata: SiteMetadata,

    #[serde(default)]
    pub branding: Branding,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub navigation: Navigation,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub integrations: IntegrationsConfig,

    #[serde(default)]
    pub seo: SeoConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing: Option<LandingConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18nConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versioning: Option<VersioningConfig>,
}

/// Site identity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteMetadata {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Public site URL, used for canonical links and structured data
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Branding {
    pub logo: Logo,
    pub favicon: String,
    pub colors: Colors,
    pub fonts: Fonts,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Logo {
    pub light: String,
    pub dark: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Fonts {
    pub body: String,
    pub code: String,
}

/// Color scheme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub default_dark: bool,
    pub primary_color: String,
    pub accent_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Navigation {
    pub navbar: NavbarConfig,
    pub sidebar: Vec<SidebarGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub links: Vec<NavLink>,
    pub cta: Option<NavbarCta>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NavbarCta {
    pub label: String,
    pub href: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// A labelled group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SidebarGroup {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

/// A sidebar entry, possibly holding nested entries.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SidebarItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// HTTP method badge for API endpoint pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
}

impl SidebarItem {
    /// Whether this entry documents an API endpoint.
    pub fn is_endpoint(&self) -> bool {
        self.method.is_some()
    }

    /// This entry and all nested entries, depth first.
    pub fn walk(&self) -> Vec<&SidebarItem> {
        let mut out = vec![self];
        for child in &self.items {
            out.extend(child.walk());
        }
        out
    }
}

/// Footer layout variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterLayout {
    #[default]
    Full,
    Compact,
    Centered,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    /// Falls back to the branding logo when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<FooterLogo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// Copyright text with an optional `{year}` placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    #[serde(default = "default_true")]
    pub show_branding: bool,

    #[serde(default = "default_true")]
    pub show_version: bool,

    #[serde(default)]
    pub layout: FooterLayout,

    /// Platform name to profile URL, in display order
    #[serde(default)]
    pub socials: IndexMap<String, String>,

    #[serde(default)]
    pub links: Vec<FooterSection>,

    #[serde(default)]
    pub bottom_links: Vec<FooterLink>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            logo: None,
            tagline: None,
            copyright: None,
            show_branding: true,
            show_version: true,
            layout: FooterLayout::default(),
            socials: IndexMap::new(),
            links: Vec::new(),
            bottom_links: Vec::new(),
        }
    }
}

impl FooterConfig {
    /// Copyright line with `{year}` filled in.
    pub fn copyright_text(&self, year: i32) -> Option<String> {
        self.copyright
            .as_ref()
            .map(|text| text.replace("{year}", &year.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FooterLogo {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FooterSection {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
    /// Open in a new tab
    #[serde(default)]
    pub external: bool,
}

/// Search backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    #[default]
    Local,
    Algolia,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    pub enabled: bool,
    pub provider: SearchProvider,
    pub placeholder: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: SearchProvider::Local,
            placeholder: "Search docs...".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    pub analytics: Option<AnalyticsConfig>,
    pub feedback: FeedbackConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConfig {
    pub provider: String,
    pub measurement_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub enabled: bool,
}

/// Landing page content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LandingConfig {
    pub enabled: bool,
    pub hero: Option<Hero>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub cta: Vec<HeroCta>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeroCta {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub variant: CtaVariant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Internationalization settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct I18nConfig {
    pub default_locale: Option<String>,
    pub locales: Vec<String>,
    pub routing: I18nRouting,

    /// Locale to key to translated string
    pub translations: IndexMap<String, IndexMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct I18nRouting {
    pub prefix_default_locale: bool,
}

impl I18nConfig {
    /// Look up a translated string.
    pub fn translate(&self, locale: &str, key: &str) -> Option<&str> {
        self.translations
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

fn default_true() -> bool {
    true
}

impl DocsConfig {
    /// Versioning settings, if configured.
    pub fn versioning(&self) -> Option<&VersioningConfig> {
        self.versioning.as_ref()
    }

    /// All sidebar entries that document API endpoints.
    pub fn endpoints(&self) -> Vec<&SidebarItem> {
        self.navigation
            .sidebar
            .iter()
            .flat_map(|group| group.items.iter())
            .flat_map(|item| item.walk())
            .filter(|item| item.is_endpoint())
            .collect()
    }

    /// Report configuration mistakes that loading tolerates.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues: Vec<ConfigIssue> = self
            .versioning
            .as_ref()
            .map(|v| v.validate().into_iter().map(ConfigIssue::from).collect())
            .unwrap_or_default();

        if let Some(i18n) = &self.i18n {
            if let Some(default_locale) = &i18n.default_locale {
                if !i18n.locales.is_empty() && !i18n.locales.contains(default_locale) {
                    issues.push(ConfigIssue::UnknownDefaultLocale(default_locale.clone()));
                }
            }
        }

        for group in &self.navigation.sidebar {
            if group.items.is_empty() {
                issues.push(ConfigIssue::EmptySidebarGroup(group.label.clone()));
            }
        }

        issues
    }
}

/// A problem found by [`DocsConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssue {
    #[error(transparent)]
    Versioning(#[from] VersioningIssue),

    #[error("Default locale '{0}' is not listed in i18n.locales")]
    UnknownDefaultLocale(String),

    #[error("Sidebar group '{0}' has no items")]
    EmptySidebarGroup(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> DocsConfig {
        serde_json::from_str(r#"{ "metadata": { "name": "Docs" } }"#).unwrap()
    }

    #[test]
    fn fills_defaults_for_missing_sections() {
        let config = minimal();

        assert_eq!(config.metadata.name, "Docs");
        assert_eq!(config.theme.mode, ThemeMode::Auto);
        assert!(config.footer.show_branding);
        assert!(config.footer.show_version);
        assert!(config.search.enabled);
        assert_eq!(config.search.provider, SearchProvider::Local);
        assert!(config.integrations.analytics.is_none());
        assert!(config.versioning().is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn parses_nested_sidebar_with_methods() {
        let json = r#"{
            "metadata": { "name": "API" },
            "navigation": {
                "sidebar": [{
                    "label": "Users",
                    "items": [
                        { "label": "Overview", "slug": "users" },
                        { "label": "Create", "slug": "users/create", "method": "POST" },
                        { "label": "Admin", "items": [
                            { "label": "Delete", "slug": "users/delete", "method": "DELETE" }
                        ]}
                    ]
                }]
            }
        }"#;

        let config: DocsConfig = serde_json::from_str(json).unwrap();
        let endpoints: Vec<_> = config
            .endpoints()
            .into_iter()
            .map(|item| (item.label.as_str(), item.method))
            .collect();

        assert_eq!(
            endpoints,
            vec![
                ("Create", Some(HttpMethod::Post)),
                ("Delete", Some(HttpMethod::Delete)),
            ]
        );
    }

    #[test]
    fn footer_copyright_fills_year() {
        let footer = FooterConfig {
            copyright: Some("© {year} Acme".to_string()),
            ..Default::default()
        };

        assert_eq!(footer.copyright_text(2026), Some("© 2026 Acme".to_string()));
        assert_eq!(FooterConfig::default().copyright_text(2026), None);
    }

    #[test]
    fn translates_known_keys() {
        let json = r#"{
            "defaultLocale": "en",
            "locales": ["en", "de"],
            "routing": { "prefixDefaultLocale": true },
            "translations": { "de": { "search": "Suchen" } }
        }"#;

        let i18n: I18nConfig = serde_json::from_str(json).unwrap();

        assert!(i18n.routing.prefix_default_locale);
        assert_eq!(i18n.translate("de", "search"), Some("Suchen"));
        assert_eq!(i18n.translate("fr", "search"), None);
    }

    #[test]
    fn validation_collects_all_sections() {
        let mut config = minimal();
        config.i18n = Some(I18nConfig {
            default_locale: Some("fr".to_string()),
            locales: vec!["en".to_string()],
            ..Default::default()
        });
        config.versioning = Some(VersioningConfig {
            enabled: true,
            ..Default::default()
        });
        config.navigation.sidebar.push(SidebarGroup {
            label: "Empty".to_string(),
            icon: None,
            items: vec![],
        });

        assert_eq!(
            config.validate(),
            vec![
                ConfigIssue::Versioning(VersioningIssue::NoVersions),
                ConfigIssue::UnknownDefaultLocale("fr".to_string()),
                ConfigIssue::EmptySidebarGroup("Empty".to_string()),
            ]
        );
    }
}
