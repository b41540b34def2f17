//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `ONEFLOW_API_URL` is set, the environment wins
//! 2. Otherwise, probes for a config file (JSON or TOML)
//! 3. Otherwise, built-in defaults (local backend, token file in cwd)
//!
//! ## Environment Variables
//! - `ONEFLOW_API_URL`: API base URL
//! - `ONEFLOW_TOKEN_PATH`: persisted-token file path (optional)
//!
//! ## File Locations
//! The loader probes, in order: `./config.json`, `./config.toml`,
//! `./oneflow.json`, `./oneflow.toml`.

use std::path::{Path, PathBuf};

use oneflow_domain::constants::{DEFAULT_TOKEN_FILE, ENV_API_URL, ENV_TOKEN_PATH};
use oneflow_domain::{ApiConfig, AuthConfig, Config, RequestError, Result};
use tracing::{debug, info};

const PROBE_FILES: [&str; 4] = ["config.json", "config.toml", "oneflow.json", "oneflow.toml"];

/// Load configuration with automatic fallback strategy.
///
/// # Errors
/// Returns `RequestError::Config` if a present source (env var or probed
/// file) is invalid. A missing source falls through instead of failing.
pub fn load() -> Result<Config> {
    if std::env::var_os(ENV_API_URL).is_some() {
        let config = load_from_env()?;
        info!("configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => {
            info!(path = %path.display(), "loading configuration from file");
            load_from_file(&path)
        }
        None => {
            debug!("no configuration found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables.
///
/// # Errors
/// Returns `RequestError::Config` if `ONEFLOW_API_URL` is missing or not a
/// valid URL.
pub fn load_from_env() -> Result<Config> {
    let base_url = std::env::var(ENV_API_URL)
        .map_err(|_| RequestError::Config(format!("{} is not set", ENV_API_URL)))?;

    let token_path = std::env::var(ENV_TOKEN_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE));

    validate(Config {
        api: ApiConfig { base_url },
        auth: AuthConfig { token_path },
    })
}

/// Load configuration from a JSON or TOML file (detected by extension).
///
/// # Errors
/// Returns `RequestError::Config` if the file cannot be read or parsed, or
/// the base URL it carries is invalid.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| RequestError::Config(format!("failed to read config file: {}", err)))?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&contents)
            .map_err(|err| RequestError::Config(format!("invalid TOML config: {}", err)))?,
        _ => serde_json::from_str(&contents)
            .map_err(|err| RequestError::Config(format!("invalid JSON config: {}", err)))?,
    };

    validate(config)
}

fn probe_config_paths() -> Option<PathBuf> {
    PROBE_FILES.iter().map(PathBuf::from).find(|path| path.exists())
}

fn validate(config: Config) -> Result<Config> {
    url::Url::parse(&config.api.base_url)
        .map_err(|err| RequestError::Config(format!("invalid base URL: {}", err)))?;
    Ok(config)
}
