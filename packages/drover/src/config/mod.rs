//! Configuration loading.
//!
//! The configuration file is JSON with comments. It is optional: callers that
//! get [`ConfigError::NotFound`] fall back to [`DroverConfig::default`], which
//! [`load_config_or_default`] does for them.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use types::{DroverConfig, ExecutorConfig, WaitConfig};

use crate::core::constants::{APP_NAME, CONFIG_ENV_VAR};

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error("No configuration file found. Expected at $DROVER_CONFIG or ~/.config/drover/config.jsonc")]
    NotFound,

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$DROVER_CONFIG`, if set
/// 2. `$XDG_CONFIG_HOME/drover/config.jsonc` or `config.json`, if set
/// 3. `~/.config/drover/config.jsonc` or `config.json`
/// 4. the platform config directory (`dirs::config_dir`)
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(explicit));
    }

    let mut push_dir = |dir: PathBuf| {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME is often ~/.config
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    };

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        push_dir(PathBuf::from(xdg_config).join(APP_NAME));
    }

    if let Some(home) = dirs::home_dir() {
        push_dir(home.join(".config").join(APP_NAME));
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_dir(config_dir.join(APP_NAME));
    }

    paths
}

/// Loads the configuration from a specific file path.
///
/// Both single-line (`//`) and multi-line (`/* */`) comments are stripped
/// before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it could not be read, and
/// `ConfigError::ParseError` if it contains invalid JSON.
pub fn load_config_from_path(path: &Path) -> Result<DroverConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config = serde_json::from_reader(reader)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Loads the configuration from the first available config file.
///
/// Returns the parsed configuration and the path it came from.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no file exists in any of the expected
/// locations, otherwise the errors of [`load_config_from_path`].
pub fn load_config() -> Result<(DroverConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            let config = load_config_from_path(&path)?;
            return Ok((config, path));
        }
    }

    Err(ConfigError::NotFound)
}

/// Loads the configuration, using defaults when no file exists.
///
/// # Errors
///
/// Returns `ConfigError::IoError` or `ConfigError::ParseError` if a file was
/// found but is unusable. A broken file is never silently ignored.
pub fn load_config_or_default() -> Result<DroverConfig, ConfigError> {
    match load_config() {
        Ok((config, _)) => Ok(config),
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            Ok(DroverConfig::default())
        }
        Err(err) => Err(err),
    }
}

/// Generates a JSON Schema for the Drover configuration.
#[must_use]
pub fn generate_schema() -> schemars::Schema { schemars::schema_for!(DroverConfig) }

/// Generates a pretty-printed JSON Schema string for the Drover configuration.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
