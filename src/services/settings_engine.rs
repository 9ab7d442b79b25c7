// Qio Settings Engine
// Manages user settings: loading, saving, typed updates, and resetting to defaults.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::{QioSettings, ThemeMode};

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<QioSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn settings(&self) -> &QioSettings;
    fn set_theme(&mut self, mode: ThemeMode) -> Result<(), SettingsError>;
    fn set_vibrate_on_scan(&mut self, enabled: bool) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: QioSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("settings.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            config_path,
            settings: QioSettings::default(),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings. Unknown fields
    /// in the file are ignored and missing sections default, so settings
    /// written by an older build keep loading.
    fn load(&mut self) -> Result<QioSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = QioSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: QioSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Returns a reference to the current in-memory settings.
    fn settings(&self) -> &QioSettings {
        &self.settings
    }

    /// Updates the theme mode and saves to disk.
    fn set_theme(&mut self, mode: ThemeMode) -> Result<(), SettingsError> {
        self.settings.appearance.theme = mode;
        self.save()
    }

    /// Updates the vibrate-on-scan flag and saves to disk.
    fn set_vibrate_on_scan(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.settings.scanner.vibrate_on_scan = enabled;
        self.save()
    }

    /// Resets all settings to factory defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = QioSettings::default();
        self.save()?;
        Ok(())
    }

    /// Returns the path to the config file.
    fn config_path(&self) -> &str {
        &self.config_path
    }
}
