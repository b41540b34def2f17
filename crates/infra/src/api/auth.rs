//! Auth endpoints

use std::sync::Arc;

use async_trait::async_trait;
use oneflow_core::auth::ports::AuthGateway;
use oneflow_domain::{AuthResponse, AuthUser, Credentials, Result, SignupRequest};
use serde::Deserialize;

use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: AuthUser,
}

/// Client for `/auth/login`, `/auth/signup`, and `/auth/me`.
pub struct AuthApi {
    gateway: Arc<HttpGateway>,
}

impl AuthApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        self.gateway.post("/auth/login", credentials).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        self.gateway.post("/auth/signup", request).await
    }

    pub async fn me(&self) -> Result<AuthUser> {
        let envelope: UserEnvelope = self.gateway.get("/auth/me").await?;
        Ok(envelope.user)
    }
}

#[async_trait]
impl AuthGateway for AuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        self.login(credentials).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        self.signup(request).await
    }

    async fn me(&self) -> Result<AuthUser> {
        self.me().await
    }
}
