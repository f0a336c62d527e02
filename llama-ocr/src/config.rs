//! Persisted configuration.
//!
//! A single JSON file at `~/.llamaocr.json` carries the API key between
//! invocations. The file is created on first read, rewritten whole on save,
//! and fields this version does not know about survive a rewrite untouched.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parse or serialize error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Config file name, looked up in the home directory.
const CONFIG_FILE: &str = ".llamaocr.json";

/// Persisted settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Together API key.
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Fields not recognized by this version, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Get the config file path (`~/.llamaocr.json`).
#[must_use]
pub fn config_path() -> PathBuf {
    dirs_next::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE)
}

/// Load configuration from the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, created, or parsed.
pub async fn fetch_config() -> ConfigResult<Config> {
    fetch_config_from(config_path()).await
}

/// Load configuration from a specific path.
///
/// When no file exists yet, an empty JSON object is written first, so a
/// fetch always leaves a config file behind.
///
/// # Errors
///
/// Returns an error if the file cannot be read, created, or parsed.
pub async fn fetch_config_from(path: PathBuf) -> ConfigResult<Config> {
    if !path.exists() {
        tokio::fs::write(&path, "{}").await?;
        debug!(path = %path.display(), "created empty config file");
    }

    let content = tokio::fs::read_to_string(&path).await?;
    let config: Config = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Save configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub async fn write_config(config: &Config) -> ConfigResult<()> {
    write_config_to(config, config_path()).await
}

/// Save configuration to a specific path, replacing the whole file.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub async fn write_config_to(config: &Config, path: PathBuf) -> ConfigResult<()> {
    let content = serde_json::to_string_pretty(config)?;
    tokio::fs::write(&path, content).await?;
    info!(path = %path.display(), "saved config file");

    Ok(())
}
