//! Client configuration structures
//!
//! Loading lives in `oneflow-infra`; these are the parsed shapes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_TOKEN_FILE};

/// Top-level client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
    pub auth: AuthConfig,
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL all request paths are appended to (e.g.
    /// `http://localhost:3001/api`).
    pub base_url: String,
}

/// Session persistence settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthConfig {
    /// File the bearer token is persisted to between sessions. The token is
    /// the only client-side state that outlives the process.
    pub token_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig { base_url: DEFAULT_API_BASE_URL.to_string() },
            auth: AuthConfig { token_path: PathBuf::from(DEFAULT_TOKEN_FILE) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.auth.token_path, PathBuf::from(DEFAULT_TOKEN_FILE));
    }

    #[test]
    fn test_roundtrips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("serializes");
        let back: Config = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, config);
    }
}
