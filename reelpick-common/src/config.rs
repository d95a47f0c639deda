//! Configuration loading and data folder resolution
//!
//! Resolution priority for every setting is ENV → TOML config file →
//! compiled default. The TMDB API key has no compiled default and is
//! required before the service can talk to the catalog.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the data folder
pub const DATA_FOLDER_ENV: &str = "REELPICK_DATA";

/// Environment variable carrying the TMDB API key
pub const TMDB_API_KEY_ENV: &str = "REELPICK_TMDB_API_KEY";

/// TOML configuration file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Data folder holding watchlist.json, reviews.json and the quiz
    /// result cache slot
    pub data_folder: Option<String>,
    /// TMDB API key (lowest-priority source; ENV overrides)
    pub tmdb_api_key: Option<String>,
}

/// Locate the platform configuration file, if one exists
fn find_config_file() -> Option<PathBuf> {
    if let Some(user_config) = dirs::config_dir().map(|d| d.join("reelpick").join("config.toml")) {
        if user_config.exists() {
            return Some(user_config);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/reelpick/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Load the TOML config file, falling back to defaults when absent
pub fn load_toml_config() -> TomlConfig {
    let Some(path) = find_config_file() else {
        return TomlConfig::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to parse {}: {} - using defaults", path.display(), e);
                TomlConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {} - using defaults", path.display(), e);
            TomlConfig::default()
        }
    }
}

/// Write the TOML config file atomically (write to temp, then rename)
pub fn write_toml_config(config: &TomlConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("Serialize TOML failed: {}", e)))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, content)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Resolve the data folder
///
/// Priority: ENV → TOML → OS-dependent default.
pub fn resolve_data_folder(toml_config: &TomlConfig) -> PathBuf {
    if let Ok(path) = std::env::var(DATA_FOLDER_ENV) {
        return PathBuf::from(path);
    }

    if let Some(path) = &toml_config.data_folder {
        return PathBuf::from(path);
    }

    default_data_folder()
}

/// OS-dependent default data folder
fn default_data_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("reelpick"))
        .unwrap_or_else(|| PathBuf::from("./reelpick_data"))
}

/// Create the data folder if it does not yet exist
pub fn ensure_data_folder(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
        info!("Created data folder: {}", path.display());
    }
    Ok(())
}

/// Resolve the TMDB API key from 2-tier configuration
///
/// Priority: ENV → TOML. Warns when both sources carry a usable key.
pub fn resolve_tmdb_api_key(toml_config: &TomlConfig) -> Result<String> {
    let env_key = std::env::var(TMDB_API_KEY_ENV).ok();
    let toml_key = toml_config.tmdb_api_key.as_ref();

    let mut sources = Vec::new();
    if env_key.as_deref().is_some_and(is_valid_key) {
        sources.push("environment");
    }
    if toml_key.map(|k| is_valid_key(k)).unwrap_or(false) {
        sources.push("TOML");
    }

    if sources.len() > 1 {
        warn!(
            "TMDB API key found in multiple sources: {}. Using environment (highest priority).",
            sources.join(", ")
        );
    }

    if let Some(key) = env_key {
        if is_valid_key(&key) {
            info!("TMDB API key loaded from environment variable");
            return Ok(key);
        }
    }

    if let Some(key) = toml_key {
        if is_valid_key(key) {
            info!("TMDB API key loaded from TOML config");
            return Ok(key.clone());
        }
    }

    Err(Error::Config(format!(
        "TMDB API key not configured. Please configure using one of:\n\
         1. Environment: {}=your-key-here\n\
         2. TOML config: config.toml (tmdb_api_key = \"your-key\")\n\
         \n\
         Obtain API key at: https://www.themoviedb.org/settings/api",
        TMDB_API_KEY_ENV
    )))
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}
