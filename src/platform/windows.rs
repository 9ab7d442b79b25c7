// Qio platform paths for Windows
// Config: %APPDATA%/Qio
// Data:   %APPDATA%/Qio

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Qio on Windows.
/// `%APPDATA%/Qio`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Qio")
}

/// Returns the data directory for Qio on Windows.
/// `%APPDATA%/Qio`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Qio")
}
