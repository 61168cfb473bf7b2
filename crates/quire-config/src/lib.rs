//! Site configuration for quire documentation sites.
//!
//! Defines the configuration schema (branding, navigation, SEO, versioning,
//! i18n), loads it from JSON or TOML, and builds the structured SEO data
//! pages embed.

pub mod loader;
pub mod schema;
pub mod seo;

pub use loader::{load_config, parse_config, ConfigError, ConfigFormat, ParseError};
pub use schema::{
    AnalyticsConfig, Branding, ConfigIssue, DocsConfig, FooterConfig, FooterLayout, I18nConfig,
    NavLink, NavbarConfig, Navigation, SearchConfig, SearchProvider, SidebarGroup, SidebarItem,
    SiteMetadata, ThemeConfig, ThemeMode,
};
pub use seo::{ArticleType, OgType, SeoConfig, SeoFrontmatter};
