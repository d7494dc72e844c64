//! Application configuration module
//!
//! Settings are persisted with `confy` in the OS-specific config directory,
//! or at an explicit path when one is given.

use crate::constant::APP_NAME;
use crate::differ::line_diff::LineAlgorithm;
use crate::differ::preview::PreviewStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = confy::load_path(path)?;
        info!("Load config from {:?}", path);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, &self.settings)?;
        info!("Save config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Using default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Line diff algorithm: "myers", "patience" or "lcs"
    #[serde(default)]
    pub algorithm: LineAlgorithm,

    /// Preview margins and per-side colours
    #[serde(default)]
    pub preview: PreviewStyle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;
    use std::fs;
    use uuid::Uuid;

    fn temp_config_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("test_config_{}", Uuid::new_v4()))
            .join("settings.toml")
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = temp_config_path();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.settings, Settings::default());
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn settings_round_trip_through_file() {
        let path = temp_config_path();
        let mut config = Config {
            settings: Settings::default(),
        };
        config.settings.algorithm = LineAlgorithm::Patience;
        config.settings.preview.x_margin = 12.5;
        config.settings.preview.lhs_palette.padding = Color32::from_rgb(1, 2, 3);

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.settings, config.settings);
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
