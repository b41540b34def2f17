//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::GENERIC_ERROR_MESSAGE;

/// Failure of a request issued through the gateway.
///
/// For the HTTP variants the message is the server-provided `error` field
/// when the response body carried one, otherwise [`GENERIC_ERROR_MESSAGE`].
/// `Network` carries whatever message the transport produced; no shape is
/// assumed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RequestError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Categories of request errors, for logging labels and callers that only
/// care about the class of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorCategory {
    /// 401/403 responses
    Authentication,
    /// Other 4xx responses
    Client,
    /// 5xx responses
    Server,
    /// Transport-level failures
    Network,
    /// Undecodable success responses
    Parse,
    /// Invalid client configuration
    Config,
}

impl RequestError {
    /// Build the error for a non-success HTTP status.
    ///
    /// `server_message` is the parsed `{"error": ...}` field when the body
    /// carried one; absent or unparseable bodies fall back to the generic
    /// message.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        let message = server_message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        match status {
            401 | 403 => Self::Auth(message),
            400..=499 => Self::Client(message),
            500..=599 => Self::Server(message),
            _ => Self::Network(message),
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> RequestErrorCategory {
        match self {
            Self::Auth(_) => RequestErrorCategory::Authentication,
            Self::Client(_) => RequestErrorCategory::Client,
            Self::Server(_) => RequestErrorCategory::Server,
            Self::Network(_) => RequestErrorCategory::Network,
            Self::Parse(_) => RequestErrorCategory::Parse,
            Self::Config(_) => RequestErrorCategory::Config,
        }
    }

    /// The user-facing message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Auth(m)
            | Self::Client(m)
            | Self::Server(m)
            | Self::Network(m)
            | Self::Parse(m)
            | Self::Config(m) => m,
        }
    }

    /// Stable label suitable for structured logging fields.
    pub fn label(&self) -> &'static str {
        match self.category() {
            RequestErrorCategory::Authentication => "auth",
            RequestErrorCategory::Client => "client",
            RequestErrorCategory::Server => "server",
            RequestErrorCategory::Network => "network",
            RequestErrorCategory::Parse => "parse",
            RequestErrorCategory::Config => "config",
        }
    }
}

/// Result type alias for OneFlow client operations
pub type Result<T> = std::result::Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let auth = RequestError::from_status(401, Some("Invalid credentials".into()));
        assert!(matches!(auth, RequestError::Auth(_)));
        assert_eq!(auth.message(), "Invalid credentials");

        assert!(matches!(
            RequestError::from_status(403, None),
            RequestError::Auth(_)
        ));
        assert!(matches!(
            RequestError::from_status(404, Some("Task not found".into())),
            RequestError::Client(_)
        ));
        assert!(matches!(
            RequestError::from_status(500, None),
            RequestError::Server(_)
        ));
    }

    #[test]
    fn test_generic_fallback_message() {
        let err = RequestError::from_status(422, None);
        assert_eq!(err.message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            RequestError::Auth("x".into()).category(),
            RequestErrorCategory::Authentication
        );
        assert_eq!(
            RequestError::Network("x".into()).category(),
            RequestErrorCategory::Network
        );
        assert_eq!(RequestError::Parse("x".into()).label(), "parse");
    }

    #[test]
    fn test_serializes_tagged() {
        let err = RequestError::Server("boom".into());
        let json = serde_json::to_value(&err).expect("serializes");
        assert_eq!(json["type"], "Server");
        assert_eq!(json["message"], "boom");
    }
}
