use anyhow::{Result, anyhow};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log: Log,
    pub source: Source,
    pub view: View,
    pub update: Update,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct Source {
    pub backend: String, // "fake" or "http"
    pub base_url: String,
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    #[serde(default)]
    pub fake: FakeSource,
}

#[derive(Debug, Default, Deserialize)]
pub struct FakeSource {
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(default)]
    pub avatars: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct View {
    pub container: String,
    pub image: String,
    #[serde(default)]
    pub initially_visible: bool,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub ordering: String, // "last_resolved" or "latest_request"
}

fn default_path_prefix() -> String {
    crate::domain_model::AVATAR_PATH_PREFIX.to_string()
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

/// Loads settings from `path` (or the build default), then applies
/// `AVATAR__SECTION__KEY` environment overrides.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .add_source(Environment::with_prefix("AVATAR").separator("__"))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_settings_parse() {
        let settings = parse_settings(Some("settings/dev.toml")).unwrap();
        assert_eq!(settings.source.backend, "fake");
        assert_eq!(settings.source.path_prefix, "/api/v1/user_avatar/");
        assert_eq!(settings.view.container, "user_avatar");
        assert_eq!(settings.view.image, "user_avatar img");
        assert_eq!(settings.update.ordering, "last_resolved");
        assert!(!settings.source.fake.avatars.is_empty());
    }

    #[test]
    fn release_settings_parse() {
        let settings = parse_settings(Some("settings/release.toml")).unwrap();
        assert_eq!(settings.source.backend, "http");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_settings(Some("settings/does_not_exist.toml")).is_err());
    }
}
