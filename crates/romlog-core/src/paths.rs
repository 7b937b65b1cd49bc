//! Filesystem locations for romlog state

use std::path::PathBuf;

use crate::constants::ui::{CONFIG_DIR_NAME, PREFS_FILE_NAME};

/// Root config directory (`~/.romlog`)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Directory for log files (`~/.romlog/logs`)
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Preferences file (`~/.romlog/config.toml`)
pub fn prefs_file() -> PathBuf {
    config_dir().join(PREFS_FILE_NAME)
}
