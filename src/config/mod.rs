// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Both keys are optional: a missing file or a missing key falls back to
//! the built-in defaults (system locale, default distribution server).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AdmInstaller";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `zh-CN`).
    pub language: Option<String>,
    /// Distribution server URL the commands should point at.
    #[serde(default)]
    pub server_url: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("zh-CN".to_string()),
            server_url: Some("https://install.example.com".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.server_url, config.server_url);
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_from_path_tolerates_missing_keys() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write empty config");

        let loaded = load_from_path(&config_path).expect("empty config should load");
        assert!(loaded.language.is_none());
        assert!(loaded.server_url.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config {
            language: Some("en".to_string()),
            server_url: None,
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
