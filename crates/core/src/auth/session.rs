//! The process-wide authentication session
//!
//! Holds the authenticated user, restores a persisted session on startup,
//! and owns the token lifecycle: persisted on login/signup, cleared on
//! logout or failed restoration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use oneflow_domain::{AuthResponse, AuthUser, Credentials, Result, SignupRequest, UserRole};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::ports::{AuthGateway, TokenStore};

/// Process-wide auth session.
///
/// Constructed once at application start with its gateway and token store
/// injected, then shared by reference. `user` is non-null exactly while a
/// login/signup or startup restoration has succeeded and no logout has
/// followed.
pub struct AuthSession {
    gateway: Arc<dyn AuthGateway>,
    tokens: Arc<dyn TokenStore>,
    user: RwLock<Option<AuthUser>>,
    loading: AtomicBool,
}

impl AuthSession {
    /// Create a session in its pre-initialization state (`loading = true`).
    pub fn new(gateway: Arc<dyn AuthGateway>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            gateway,
            tokens,
            user: RwLock::new(None),
            loading: AtomicBool::new(true),
        }
    }

    /// Restore a persisted session, if any.
    ///
    /// With a persisted token present, looks the session up at the backend;
    /// success populates the user, failure clears the token and leaves the
    /// session anonymous. Either outcome ends with `loading = false`. Errors
    /// are not surfaced: a failed restoration is an anonymous start, not a
    /// fault the caller can act on.
    pub async fn initialize(&self) {
        if self.tokens.load().is_some() {
            match self.gateway.me().await {
                Ok(user) => {
                    info!(user_id = %user.id, "session restored");
                    *self.user.write() = Some(user);
                }
                Err(err) => {
                    debug!(error = %err, "session restoration failed, clearing token");
                    if let Err(store_err) = self.tokens.clear() {
                        warn!(error = %store_err, "failed to clear stale token");
                    }
                }
            }
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    /// Authenticate with email and password.
    ///
    /// On success the returned token is persisted and the profile becomes
    /// the session user. On failure the gateway error propagates unchanged
    /// and no state is touched.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser> {
        let credentials =
            Credentials { email: email.to_owned(), password: password.to_owned() };
        let response = self.gateway.login(&credentials).await?;
        Ok(self.establish(response))
    }

    /// Create an account; same contract as [`login`](Self::login).
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: UserRole,
    ) -> Result<AuthUser> {
        let request = SignupRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            name: name.to_owned(),
            role,
        };
        let response = self.gateway.signup(&request).await?;
        Ok(self.establish(response))
    }

    fn establish(&self, response: AuthResponse) -> AuthUser {
        if let Err(err) = self.tokens.store(&response.token) {
            // Session still works in memory; it just won't survive a restart.
            warn!(error = %err, "failed to persist session token");
        }
        info!(user_id = %response.user.id, "session established");
        *self.user.write() = Some(response.user.clone());
        response.user
    }

    /// End the session: clears the user and the persisted token.
    /// Synchronous by contract - no network call is made.
    pub fn logout(&self) {
        *self.user.write() = None;
        if let Err(err) = self.tokens.clear() {
            warn!(error = %err, "failed to clear persisted token on logout");
        }
        info!("session ended");
    }

    /// The session user, if authenticated.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.user.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// `true` until [`initialize`](Self::initialize) has completed.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}
