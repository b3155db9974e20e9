use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WidgetError};
use crate::passgen::{CharacterClassSelection, LengthRange};

const APP_DIR: &str = "passwidget";
const SETTINGS_FILE: &str = "settings.json";

/// Control defaults remembered between runs. Passwords are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub length: usize,
    #[serde(flatten)]
    pub selection: CharacterClassSelection,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            length: LengthRange::DEFAULT_LENGTH,
            selection: CharacterClassSelection::default(),
        }
    }
}

impl WidgetSettings {
    /// Load settings from the config file
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            _ => Self::default(),
        }
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| WidgetError::Settings(format!("Failed to read settings file: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| WidgetError::Settings(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to the config file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()
            .ok_or_else(|| WidgetError::Settings("Could not determine config directory".into()))?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                WidgetError::Settings(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WidgetError::Settings(format!("Failed to serialize settings: {}", e)))?;

        fs::write(path, contents)
            .map_err(|e| WidgetError::Settings(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Get the path to the config file
    fn get_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA")
                .ok()
                .map(|appdata| PathBuf::from(appdata).join(APP_DIR).join(SETTINGS_FILE))
        }

        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME").ok().map(|home| {
                PathBuf::from(home)
                    .join("Library")
                    .join("Application Support")
                    .join(APP_DIR)
                    .join(SETTINGS_FILE)
            })
        }

        #[cfg(target_os = "linux")]
        {
            // Try XDG_CONFIG_HOME first, fall back to ~/.config
            let config_dir = std::env::var("XDG_CONFIG_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|home| PathBuf::from(home).join(".config"))
                });

            config_dir.map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
