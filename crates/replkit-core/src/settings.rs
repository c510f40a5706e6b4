//! Layered user settings
//!
//! Precedence (low to high):
//! 1. Built-in defaults
//! 2. User settings file (~/.replkit/config.yaml)
//! 3. Environment variables (REPLKIT_CONFIG_DIR, REPLKIT_API_URL, REPLIT_TOKEN)
//! 4. CLI flags (applied by the caller)

use crate::error::{Error, Result};
use crate::materializer::DEFAULT_CONFIG_DIR;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;
use tracing::debug;

/// Default GraphQL endpoint for remote Repl operations
pub const DEFAULT_API_URL: &str = "https://replit.com/graphql";

/// Settings file name inside the settings directory
const SETTINGS_FILE: &str = "config.yaml";

pub const ENV_CONFIG_DIR: &str = "REPLKIT_CONFIG_DIR";
pub const ENV_API_URL: &str = "REPLKIT_API_URL";
pub const ENV_TOKEN: &str = "REPLIT_TOKEN";

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Config record directory, relative paths resolve against the work dir
    pub config_dir: Utf8PathBuf,
    /// GraphQL endpoint
    pub api_url: String,
    /// API token for remote operations
    pub token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_dir: Utf8PathBuf::from(DEFAULT_CONFIG_DIR),
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

/// On-disk settings; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub config_dir: Option<Utf8PathBuf>,
    pub api_url: Option<String>,
    pub token: Option<String>,
}

impl Settings {
    fn apply_file(mut self, file: SettingsFile) -> Self {
        if let Some(dir) = file.config_dir {
            self.config_dir = dir;
        }
        if let Some(url) = file.api_url {
            self.api_url = url;
        }
        if file.token.is_some() {
            self.token = file.token;
        }
        self
    }

    /// Apply overrides from an environment lookup; empty values are ignored
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = get(ENV_CONFIG_DIR) {
            debug!("{} overrides config dir", ENV_CONFIG_DIR);
            self.config_dir = Utf8PathBuf::from(dir);
        }
        if let Some(url) = get(ENV_API_URL) {
            debug!("{} overrides API url", ENV_API_URL);
            self.api_url = url;
        }
        if let Some(token) = get(ENV_TOKEN) {
            self.token = Some(token);
        }
        self
    }
}

/// Loads settings from the settings directory and environment
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings_dir: Option<Utf8PathBuf>,
}

impl SettingsLoader {
    /// Loader for `~/.replkit`; without a home directory only defaults and env apply
    pub fn new() -> Self {
        let settings_dir = dirs::home_dir()
            .and_then(|home| Utf8PathBuf::from_path_buf(home).ok())
            .map(|home| home.join(".replkit"));
        Self { settings_dir }
    }

    /// Loader with a custom settings directory
    pub fn with_dir(settings_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            settings_dir: Some(settings_dir.into()),
        }
    }

    /// Path of the settings file, if a settings directory is known
    pub fn settings_path(&self) -> Option<Utf8PathBuf> {
        self.settings_dir.as_ref().map(|d| d.join(SETTINGS_FILE))
    }

    /// Load settings using the process environment
    pub fn load(&self) -> Result<Settings> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Load settings using a custom environment lookup
    pub fn load_with_env<F>(&self, lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(path) = self.settings_path() {
            if path.is_file() {
                settings = settings.apply_file(Self::read_file(&path)?);
            }
        }

        Ok(settings.apply_env(lookup))
    }

    fn read_file(path: &Utf8Path) -> Result<SettingsFile> {
        debug!("Loading settings from {}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| Error::settings(format!("Failed to read {}: {}", path, e)))?;
        if content.trim().is_empty() {
            return Ok(SettingsFile::default());
        }
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::settings(format!("Failed to parse {}: {}", path, e)))
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
