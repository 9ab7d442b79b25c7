use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QioSettings {
    #[serde(default)]
    pub appearance: AppearanceSettings,
    #[serde(default)]
    pub scanner: ScannerSettings,
}

/// Appearance and visual settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
        }
    }
}

/// Scanner behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScannerSettings {
    /// Haptic feedback when a code is detected.
    pub vibrate_on_scan: bool,
    /// Barcode format names the camera layer is asked to detect.
    pub barcode_formats: Vec<String>,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            vibrate_on_scan: true,
            barcode_formats: vec!["qr".to_string()],
        }
    }
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
    System,
}
