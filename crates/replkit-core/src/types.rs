//! Configuration record types

use crate::error::{Error, Result};
use crate::profile::{Language, LanguageProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paths the packager never touches
const DEFAULT_IGNORED_PATHS: &[&str] = &[".git"];

/// Longest slug [`slugify`] produces; keeps `<slug>.json` under common
/// file-name limits
pub const MAX_SLUG_LEN: usize = 100;

/// Configuration record written to `<config-dir>/<slug>.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplConfig {
    pub title: String,
    pub language: Language,
    pub private: bool,
    pub created_at: DateTime<Utc>,
    pub entry_point: String,
    pub run: String,
    /// Command run when the Repl boots; empty means none
    #[serde(rename = "onBoot", default)]
    pub on_boot: String,
    pub packager: PackagerConfig,
}

/// Package manager settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagerConfig {
    pub language: Language,
    pub ignored_paths: Vec<String>,
}

impl ReplConfig {
    /// Build a record for an already-validated title
    pub fn new(
        title: String,
        profile: &LanguageProfile,
        private: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            language: profile.language,
            private,
            created_at,
            entry_point: profile.entry_filename.to_string(),
            run: profile.run_command.to_string(),
            on_boot: String::new(),
            packager: PackagerConfig {
                language: profile.language,
                ignored_paths: DEFAULT_IGNORED_PATHS
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
            },
        }
    }

    /// Slug used as the config file's base name
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

/// Trim a title and reject it if nothing is left
pub fn validate_title(title: &str) -> Result<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_title(title));
    }
    Ok(trimmed)
}

/// Derive a filesystem-safe slug from a title.
///
/// Lower-cases the title and replaces every character that is not an ASCII
/// letter or digit with `_`, then cuts the result to [`MAX_SLUG_LEN`]
/// characters. Distinct titles may share a slug.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(MAX_SLUG_LEN)
        .collect()
}
