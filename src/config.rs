// Configuration module for toast
// This module handles loading and parsing configuration from ~/.config/toast/config.toml

mod types;

pub use types::{Config, ToastConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ToastError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/toast/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_or_default(&get_config_path())
}

/// Loads configuration from `path`, falling back to defaults.
///
/// A missing file is silent; unreadable or invalid files produce a warning.
pub fn load_config_or_default(path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", path);

    if !path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to load config file {:?}: {}", path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Loads configuration from an explicitly requested path.
///
/// Unlike [`load_config`], every failure is an error.
pub fn load_config_from(path: &Path) -> Result<Config, ToastError> {
    if !path.exists() {
        return Err(ToastError::ConfigNotFound(path.to_path_buf()));
    }
    read_config(path)
}

fn read_config(path: &Path) -> Result<Config, ToastError> {
    let contents = fs::read_to_string(path)?;

    #[cfg(debug_assertions)]
    log::debug!("Config file read successfully, {} bytes", contents.len());

    toml::from_str::<Config>(&contents).map_err(|e| ToastError::InvalidConfig {
        path: path.to_path_buf(),
        reason: e.message().to_string(),
    })
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/toast/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("toast")
        .join("config.toml")
}
