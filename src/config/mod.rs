// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! The API key is the only required value. It is resolved at startup in
//! this order: CLI flag, `ICED_GALLERY_API_KEY` environment variable,
//! then the config file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.api_key = Some("my-access-key".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.api_key, Some("my-access-key".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

/// Environment variable consulted when no `--api-key` flag is given.
pub const API_KEY_ENV_VAR: &str = "ICED_GALLERY_API_KEY";

/// Default search endpoint (Unsplash-compatible).
pub const DEFAULT_API_URL: &str = "https://api.unsplash.com/search/photos";

/// Default number of images requested per result page.
pub const DEFAULT_PER_PAGE: u32 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: None,
            per_page: Some(DEFAULT_PER_PAGE),
        }
    }
}

impl Config {
    /// The configured search endpoint, or the default one.
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// The configured page size, or the default one.
    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }
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

/// Loads the config from `config_dir` when given, otherwise from the
/// platform config directory. A missing file yields the defaults.
pub fn load_with_override(config_dir: Option<&Path>) -> Result<Config> {
    if let Some(dir) = config_dir {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            return load_from_path(&path);
        }
        return Ok(Config::default());
    }
    load()
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Resolves the API key: CLI flag first, then the environment variable,
/// then the config file.
pub fn resolve_api_key(flag: Option<String>, config: &Config) -> Option<String> {
    let env_value = std::env::var(API_KEY_ENV_VAR)
        .ok()
        .filter(|value| !value.is_empty());
    resolve_api_key_from(flag, env_value, config)
}

fn resolve_api_key_from(
    flag: Option<String>,
    env_value: Option<String>,
    config: &Config,
) -> Option<String> {
    flag.or(env_value).or_else(|| config.api_key.clone())
}
