//! Command implementations

pub mod create;
pub mod languages;
pub mod version;
pub mod whoami;
pub mod wizard;

use anyhow::{Context, Result};
use replkit_core::{ScaffoldSettings, Settings, SettingsLoader};

use crate::cli::GlobalArgs;

/// Load layered settings, with CLI flags applied last
pub(crate) fn load_settings(global: &GlobalArgs) -> Result<Settings> {
    let mut settings = SettingsLoader::new()
        .load()
        .context("Failed to load settings")?;

    if let Some(dir) = &global.config_dir {
        settings.config_dir = dir.clone();
    }

    Ok(settings)
}

/// Resolve where the pipeline writes for this invocation
pub(crate) fn scaffold_settings(
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<ScaffoldSettings> {
    let base = match &global.work_dir {
        Some(dir) => ScaffoldSettings::new(dir.clone()),
        None => ScaffoldSettings::from_current_dir()?,
    };
    Ok(base.with_config_dir(&settings.config_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_scaffold_settings_uses_work_dir_flag() {
        let global = GlobalArgs {
            work_dir: Some(Utf8PathBuf::from("/srv/app")),
            ..Default::default()
        };
        let resolved = scaffold_settings(&global, &Settings::default()).unwrap();
        assert_eq!(resolved.work_dir, Utf8PathBuf::from("/srv/app"));
        assert_eq!(
            resolved.config_dir,
            Utf8PathBuf::from("/srv/app/.repl-configs")
        );
    }

    #[test]
    fn test_scaffold_settings_honours_absolute_config_dir() {
        let global = GlobalArgs {
            work_dir: Some(Utf8PathBuf::from("/srv/app")),
            ..Default::default()
        };
        let settings = Settings {
            config_dir: Utf8PathBuf::from("/var/repls"),
            ..Default::default()
        };
        let resolved = scaffold_settings(&global, &settings).unwrap();
        assert_eq!(resolved.config_dir, Utf8PathBuf::from("/var/repls"));
    }
}
