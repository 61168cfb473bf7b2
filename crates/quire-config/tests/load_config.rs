use std::fs;

use pretty_assertions::assert_eq;
use quire_config::{load_config, DocsConfig, FooterLayout, SearchProvider, ThemeMode};
use quire_versioning::{build_versioned_path, resolve_version_from_path};
use tempfile::tempdir;

const JSON_CONFIG: &str = r#"{
  "metadata": {
    "name": "Acme Docs",
    "description": "Acme API documentation",
    "url": "https://docs.acme.dev",
    "version": "2.0.0"
  },
  "theme": { "mode": "dark", "defaultDark": true },
  "footer": { "layout": "compact", "copyright": "© {year} Acme", "showBranding": false },
  "search": { "enabled": true, "provider": "algolia", "placeholder": "Search" },
  "seo": { "ogImage": "/og.png", "twitterHandle": "@acme" },
  "versioning": {
    "enabled": true,
    "defaultVersion": "v2",
    "versions": [
      { "id": "v1", "label": "1.x", "path": "v1", "deprecated": true },
      { "id": "v2", "label": "2.x", "path": "v2" }
    ],
    "versionBanner": { "enabled": true, "message": "Viewing {version}, latest is {latest}" }
  }
}"#;

const TOML_CONFIG: &str = r#"
[metadata]
name = "Acme Docs"
description = "Acme API documentation"
url = "https://docs.acme.dev"
version = "2.0.0"

[theme]
mode = "dark"
defaultDark = true

[footer]
layout = "compact"
copyright = "© {year} Acme"
showBranding = false

[search]
enabled = true
provider = "algolia"
placeholder = "Search"

[seo]
ogImage = "/og.png"
twitterHandle = "@acme"

[versioning]
enabled = true
defaultVersion = "v2"

[[versioning.versions]]
id = "v1"
label = "1.x"
path = "v1"
deprecated = true

[[versioning.versions]]
id = "v2"
label = "2.x"
path = "v2"

[versioning.versionBanner]
enabled = true
message = "Viewing {version}, latest is {latest}"
"#;

fn write_and_load(name: &str, content: &str) -> DocsConfig {
    let temp = tempdir().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    load_config(&path).unwrap()
}

#[test]
fn json_and_toml_configs_are_equivalent() {
    let from_json = write_and_load("docs-config.json", JSON_CONFIG);
    let from_toml = write_and_load("docs.toml", TOML_CONFIG);

    assert_eq!(from_json, from_toml);
}

#[test]
fn loaded_config_drives_version_resolution() {
    let config = write_and_load("docs-config.json", JSON_CONFIG);

    assert_eq!(config.theme.mode, ThemeMode::Dark);
    assert_eq!(config.footer.layout, FooterLayout::Compact);
    assert!(!config.footer.show_branding);
    assert_eq!(config.search.provider, SearchProvider::Algolia);
    assert!(config.validate().is_empty());

    let versioning = config.versioning();
    let v1 = resolve_version_from_path("/v1/guide", versioning).unwrap();

    assert_eq!(v1.label, "1.x");
    assert!(v1.deprecated);
    assert_eq!(build_versioned_path("/v1/guide", v1, versioning), "/v1/guide");
}
