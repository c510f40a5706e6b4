//! Config materialization.
//!
//! Builds a [`ReplConfig`] from validated inputs and writes it as JSON to
//! `<config-dir>/<slug>.json`. Writing is idempotent by slug: a later run with
//! a title that slugifies to the same value replaces the earlier file.

use crate::error::{Error, Result};
use crate::profile;
use crate::types::{validate_title, ReplConfig};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Default directory for configuration records, relative to the working directory
pub const DEFAULT_CONFIG_DIR: &str = ".repl-configs";

/// Result of writing a configuration record
#[derive(Debug, Clone)]
pub struct Materialized {
    pub record: ReplConfig,
    pub path: Utf8PathBuf,
    /// True when a record with the same slug was replaced
    pub overwrote: bool,
}

/// Writes configuration records into a directory
#[derive(Debug, Clone)]
pub struct ConfigMaterializer {
    config_dir: Utf8PathBuf,
}

impl ConfigMaterializer {
    /// Create a materializer targeting `config_dir`
    pub fn new(config_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Directory records are written to
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Path a title's record would be written to
    pub fn record_path(&self, slug: &str) -> Utf8PathBuf {
        self.config_dir.join(format!("{}.json", slug))
    }

    /// Validate inputs and build a record stamped with the current time.
    ///
    /// Touches nothing on disk.
    pub fn build_record(&self, title: &str, language: &str, private: bool) -> Result<ReplConfig> {
        let title = validate_title(title)?;
        let profile = profile::lookup(language)?;
        Ok(ReplConfig::new(
            title.to_string(),
            profile,
            private,
            Utc::now(),
        ))
    }

    /// Write a record, creating the config directory if needed
    pub fn write(&self, record: ReplConfig) -> Result<Materialized> {
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| Error::write(self.config_dir.as_str(), e))?;

        let path = self.record_path(&record.slug());
        let overwrote = path.exists();
        if overwrote {
            warn!(
                "Overwriting existing configuration {} for title '{}'",
                path, record.title
            );
        }

        let mut json = serde_json::to_string_pretty(&record)?;
        json.push('\n');

        std::fs::write(&path, json).map_err(|e| Error::write(path.as_str(), e))?;
        debug!("Wrote configuration record to {}", path);
        info!("Materialized configuration '{}'", record.title);

        Ok(Materialized {
            record,
            path,
            overwrote,
        })
    }

    /// Build and write a record in one step
    pub fn materialize(&self, title: &str, language: &str, private: bool) -> Result<Materialized> {
        let record = self.build_record(title, language, private)?;
        self.write(record)
    }
}

impl Default for ConfigMaterializer {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_DIR)
    }
}
