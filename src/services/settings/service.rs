use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub const CONFIG_FILE_NAME: &str = "countdown.toml";

/// `<platform config dir>/countdown.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "CountdownTimer", "CountdownTimer")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Loads and saves [`Settings`] as TOML.
///
/// An explicitly requested file must exist; the default location is optional
/// and falls back to the built-in settings.
pub struct SettingsService {
    path: Option<PathBuf>,
    explicit: bool,
}

impl SettingsService {
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        match explicit_path {
            Some(path) => Self::at(path),
            None => Self {
                path: default_config_path(),
                explicit: false,
            },
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            explicit: true,
        }
    }

    pub fn load(&self) -> Result<Settings> {
        let Some(path) = self.path.as_deref() else {
            log::warn!("Unable to resolve a config directory; using built-in settings");
            return Ok(Settings::default());
        };

        if !path.exists() {
            if self.explicit {
                bail!("config file {} does not exist", path.display());
            }
            log::debug!("No config at {}; using built-in settings", path.display());
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", path.display()))?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write `settings` to the resolved path, returning where they went.
    pub fn save(&self, settings: &Settings) -> Result<PathBuf> {
        let Some(path) = self.path.as_deref() else {
            bail!("no config directory available; pass --config to choose a file");
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(path, data)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;

        Ok(path.to_path_buf())
    }
}
