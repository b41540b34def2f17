//! Users resource

use std::sync::Arc;

use oneflow_domain::{AuthUser, PasswordChange, ProfileUpdate, Result};
use serde::Deserialize;

use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
struct UsersEnvelope {
    users: Vec<AuthUser>,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: AuthUser,
}

/// Client for `/users`, `/users/profile`, and `/users/password`.
pub struct UsersApi {
    gateway: Arc<HttpGateway>,
}

impl UsersApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    /// All users visible to the caller (team pickers, assignee lists).
    pub async fn list(&self) -> Result<Vec<AuthUser>> {
        let envelope: UsersEnvelope = self.gateway.get("/users").await?;
        Ok(envelope.users)
    }

    pub async fn profile(&self) -> Result<AuthUser> {
        let envelope: UserEnvelope = self.gateway.get("/users/profile").await?;
        Ok(envelope.user)
    }

    /// Rename the profile; returns the updated record.
    pub async fn update_profile(&self, name: &str) -> Result<AuthUser> {
        let body = ProfileUpdate { name: name.to_string() };
        let envelope: UserEnvelope = self.gateway.put("/users/profile", &body).await?;
        Ok(envelope.user)
    }

    pub async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        let body = PasswordChange {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };
        self.gateway.put_discard("/users/password", &body).await
    }
}
