//! Authenticated user and auth payloads

use serde::{Deserialize, Serialize};

/// Access role assigned at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    ProjectManager,
    TeamMember,
    SalesFinance,
}

/// The session user. At most one lives in the auth session per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

/// `POST /auth/login` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /auth/signup` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
}

/// Response of both auth endpoints: a bearer token plus the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

/// `PUT /users/profile` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
}

/// `PUT /users/password` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(
            serde_json::to_string(&UserRole::ProjectManager).expect("serializes"),
            "\"project_manager\""
        );
        let role: UserRole = serde_json::from_str("\"sales_finance\"").expect("deserializes");
        assert_eq!(role, UserRole::SalesFinance);
    }

    #[test]
    fn test_password_change_is_camel_case() {
        let change = PasswordChange {
            current_password: "old".into(),
            new_password: "new".into(),
        };
        let json = serde_json::to_value(&change).expect("serializes");
        assert!(json.get("currentPassword").is_some());
        assert!(json.get("newPassword").is_some());
    }
}
