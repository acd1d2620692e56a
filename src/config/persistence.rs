//! Configuration file loading for Slovo
//!
//! Loads the settings file from the platform config directory with
//! graceful fallback to defaults. There is intentionally no save
//! counterpart: the application does not persist settings across runs.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

/// Application name used for the config directory
const APP_NAME: &str = "slovo";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Get the platform-specific configuration directory for the application.
///
/// - **Windows**: `%APPDATA%\slovo\`
/// - **macOS**: `~/Library/Application Support/slovo/`
/// - **Linux**: `~/.config/slovo/`
fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the configuration file.
pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default config file location.
///
/// Falls back to `Settings::default()` when the file is absent, empty,
/// or invalid; a corrupt file is logged, never fatal.
pub fn load_config() -> Settings {
    load_config_internal()
        .unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Internal implementation of config loading.
fn load_config_internal() -> Result<Settings> {
    let config_path = get_config_file_path()?;

    if !config_path.exists() {
        debug!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        return Ok(Settings::default());
    }

    debug!("Loading config from: {}", config_path.display());

    let contents = fs::read_to_string(&config_path).map_err(|e| Error::ConfigLoad {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    if contents.trim().is_empty() {
        debug!("Config file is empty, using defaults");
        return Ok(Settings::default());
    }

    let settings = Settings::from_json_sanitized(&contents).map_err(|e| {
        warn!(
            "Config file at {} contains invalid JSON: {}",
            config_path.display(),
            e
        );
        Error::ConfigParse {
            message: format!("Failed to parse config file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!("Loaded configuration from {}", config_path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_path_ends_with_expected_name() {
        // Skip on platforms where no config dir can be resolved.
        if let Ok(path) = get_config_file_path() {
            assert!(path.ends_with("slovo/config.json") || path.ends_with("slovo\\config.json"));
        }
    }

    #[test]
    fn test_load_config_never_panics() {
        // Whatever the environment holds, loading degrades to defaults
        // rather than failing.
        let _settings = load_config();
    }
}
