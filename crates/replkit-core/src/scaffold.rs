//! The materialization pipeline.
//!
//! Runs, in order: title validation, language lookup, template resolution,
//! config materialization, entry-point writing. Every check that can fail
//! without touching the disk runs before the first write, so rejected inputs
//! leave no files behind.

use crate::entry_point::EntryPointWriter;
use crate::error::{Error, Result};
use crate::materializer::{ConfigMaterializer, DEFAULT_CONFIG_DIR};
use crate::template::{self, TemplateCommand};
use crate::types::ReplConfig;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

/// User-supplied inputs, identical for the flag and wizard paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub title: String,
    pub language: String,
    pub private: bool,
    pub template: Option<Utf8PathBuf>,
}

impl ScaffoldOptions {
    pub fn new(title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            ..Default::default()
        }
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn with_template(mut self, template: impl Into<Utf8PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// Where the pipeline writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    /// Directory for configuration records
    pub config_dir: Utf8PathBuf,
    /// Directory the entry-point file lands in
    pub work_dir: Utf8PathBuf,
}

impl ScaffoldSettings {
    /// Settings rooted at `work_dir`, with records in `<work_dir>/.repl-configs`
    pub fn new(work_dir: impl Into<Utf8PathBuf>) -> Self {
        let work_dir = work_dir.into();
        Self {
            config_dir: work_dir.join(DEFAULT_CONFIG_DIR),
            work_dir,
        }
    }

    /// Settings rooted at the process's current directory
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::settings(format!("Cannot read current directory: {}", e)))?;
        let cwd = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|p| Error::settings(format!("Current directory is not UTF-8: {:?}", p)))?;
        Ok(Self::new(cwd))
    }

    /// Override the config directory; relative paths resolve against `work_dir`
    pub fn with_config_dir(mut self, config_dir: impl AsRef<Utf8Path>) -> Self {
        self.config_dir = self.work_dir.join(config_dir.as_ref());
        self
    }
}

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub record: ReplConfig,
    pub config_path: Utf8PathBuf,
    pub entry_point_path: Utf8PathBuf,
    /// True when an earlier record with the same slug was replaced
    pub overwrote_config: bool,
    /// Template commands, passed through uninterpreted
    pub commands: Vec<TemplateCommand>,
}

/// Runs the materialization pipeline against fixed directories
#[derive(Debug, Clone)]
pub struct Scaffolder {
    materializer: ConfigMaterializer,
    writer: EntryPointWriter,
}

impl Scaffolder {
    pub fn new(settings: &ScaffoldSettings) -> Self {
        Self {
            materializer: ConfigMaterializer::new(settings.config_dir.clone()),
            writer: EntryPointWriter::new(settings.work_dir.clone()),
        }
    }

    /// Produce the configuration record and entry-point file for `options`
    pub fn scaffold(&self, options: &ScaffoldOptions) -> Result<ScaffoldOutcome> {
        let record =
            self.materializer
                .build_record(&options.title, &options.language, options.private)?;
        let profile = record.language.profile();

        let template = template::load_optional(options.template.as_deref())?;
        let snippet = template::resolve_snippet(template.as_ref(), profile);
        let commands = template.map(|t| t.commands).unwrap_or_default();

        let materialized = self.materializer.write(record)?;
        let entry_point_path = self.writer.write(profile.entry_filename, &snippet)?;

        info!(
            "Scaffolded '{}' ({}) -> {}",
            materialized.record.title, materialized.record.language, entry_point_path
        );

        Ok(ScaffoldOutcome {
            record: materialized.record,
            config_path: materialized.path,
            entry_point_path,
            overwrote_config: materialized.overwrote,
            commands,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = ScaffoldSettings::new("/work");
        assert_eq!(settings.work_dir, Utf8PathBuf::from("/work"));
        assert_eq!(settings.config_dir, Utf8PathBuf::from("/work/.repl-configs"));
    }

    #[test]
    fn test_relative_config_dir_resolves_against_work_dir() {
        let settings = ScaffoldSettings::new("/work").with_config_dir("configs");
        assert_eq!(settings.config_dir, Utf8PathBuf::from("/work/configs"));
    }

    #[test]
    fn test_absolute_config_dir_is_kept() {
        let settings = ScaffoldSettings::new("/work").with_config_dir("/etc/repls");
        assert_eq!(settings.config_dir, Utf8PathBuf::from("/etc/repls"));
    }

    #[test]
    fn test_options_builder() {
        let options = ScaffoldOptions::new("Demo", "nodejs")
            .private(true)
            .with_template("t.json");
        assert_eq!(options.title, "Demo");
        assert!(options.private);
        assert_eq!(options.template, Some(Utf8PathBuf::from("t.json")));
    }
}
