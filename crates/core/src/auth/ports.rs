//! Port interfaces for authentication
//!
//! These traits define the boundaries between the auth session and the
//! infrastructure implementations (HTTP auth endpoints, token persistence).

use async_trait::async_trait;
use oneflow_domain::{AuthResponse, AuthUser, Credentials, Result, SignupRequest};
use thiserror::Error;

/// Trait for the backend auth endpoints
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token and profile (`POST /auth/login`)
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse>;

    /// Create an account and log it in (`POST /auth/signup`)
    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse>;

    /// Look up the session for the currently persisted token (`GET /auth/me`)
    async fn me(&self) -> Result<AuthUser>;
}

/// Failure reading or writing the persisted token
#[derive(Debug, Clone, Error)]
#[error("token store error: {0}")]
pub struct TokenStoreError(pub String);

/// Trait for single-token persistence.
///
/// The token is the only client-side state that outlives the process.
/// `load` is infallible by contract: an unreadable store is treated as no
/// session, the same as a missing one.
pub trait TokenStore: Send + Sync {
    /// The persisted token, if one exists
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value
    fn store(&self, token: &str) -> std::result::Result<(), TokenStoreError>;

    /// Remove the persisted token
    fn clear(&self) -> std::result::Result<(), TokenStoreError>;
}
