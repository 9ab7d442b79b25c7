// Qio platform paths for Linux
// Config: ~/.config/qio
// Data:   ~/.local/share/qio

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Qio on Linux.
/// Uses `$XDG_CONFIG_HOME/qio` if set, otherwise `~/.config/qio`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("qio")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("qio")
    }
}

/// Returns the data directory for Qio on Linux.
/// Uses `$XDG_DATA_HOME/qio` if set, otherwise `~/.local/share/qio`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("qio")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("qio")
    }
}
