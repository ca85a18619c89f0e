use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".maintenance_core";

/// Returns the application data directory, defaulting to `~/.maintenance_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("MAINTENANCE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
