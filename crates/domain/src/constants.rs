//! Domain constants

/// Default API base URL when no configuration overrides it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// Fallback message for error responses whose body is not parseable JSON.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "ONEFLOW_API_URL";

/// Environment variable overriding the persisted-token file path.
pub const ENV_TOKEN_PATH: &str = "ONEFLOW_TOKEN_PATH";

/// Default file name for the persisted session token.
pub const DEFAULT_TOKEN_FILE: &str = ".oneflow_token";
