//! Auth session lifecycle against a mock backend: login, signup, session
//! restoration, and logout, including the token persistence side effects.

mod support;

use std::sync::Arc;

use oneflow_core::auth::ports::TokenStore;
use oneflow_domain::{RequestError, UserRole};
use oneflow_infra::MemoryTokenStore;
use support::{mount_empty_projects, setup_context, user_json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_sets_user_and_persists_token() {
    let server = MockServer::start().await;
    mount_empty_projects(&server).await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "issued-token",
            "user": user_json("u1", "pm@oneflow.dev")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::default());
    let context = setup_context(&server, tokens.clone()).await;

    let user =
        context.auth.login("pm@oneflow.dev", "secret").await.expect("login succeeds");

    assert_eq!(user.role, UserRole::ProjectManager);
    assert_eq!(tokens.load().as_deref(), Some("issued-token"));
    assert!(context.auth.is_authenticated());
}

#[tokio::test]
async fn test_failed_login_leaves_user_null_with_server_reason() {
    let server = MockServer::start().await;
    mount_empty_projects(&server).await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "Invalid email or password"})),
        )
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::default());
    let context = setup_context(&server, tokens.clone()).await;

    let err = context.auth.login("bad@x.com", "wrong").await.expect_err("login fails");

    assert!(matches!(err, RequestError::Auth(_)));
    assert_eq!(err.message(), "Invalid email or password");
    assert!(context.auth.current_user().is_none());
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn test_signup_establishes_session() {
    let server = MockServer::start().await;
    mount_empty_projects(&server).await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "token": "signup-token",
            "user": {
                "id": "u2",
                "email": "new@oneflow.dev",
                "name": "New User",
                "role": "team_member"
            }
        })))
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::default());
    let context = setup_context(&server, tokens.clone()).await;

    let user = context
        .auth
        .signup("new@oneflow.dev", "secret", "New User", UserRole::TeamMember)
        .await
        .expect("signup succeeds");

    assert_eq!(user.id, "u2");
    assert_eq!(tokens.load().as_deref(), Some("signup-token"));
}

#[tokio::test]
async fn test_persisted_token_restores_session_on_init() {
    let server = MockServer::start().await;
    mount_empty_projects(&server).await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("Authorization", "Bearer persisted-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": user_json("u1", "pm@oneflow.dev")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::with_token("persisted-token"));
    let context = setup_context(&server, tokens.clone()).await;

    assert!(context.auth.is_authenticated());
    assert!(!context.auth.is_loading());
    assert_eq!(tokens.load().as_deref(), Some("persisted-token"));
}

#[tokio::test]
async fn test_failed_restoration_clears_token() {
    let server = MockServer::start().await;
    mount_empty_projects(&server).await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"error": "Invalid token"})),
        )
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::with_token("stale-token"));
    let context = setup_context(&server, tokens.clone()).await;

    assert!(context.auth.current_user().is_none());
    assert!(!context.auth.is_loading());
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn test_anonymous_init_never_calls_session_lookup() {
    let server = MockServer::start().await;
    mount_empty_projects(&server).await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::default());
    let context = setup_context(&server, tokens).await;

    assert!(!context.auth.is_loading());
    assert!(context.auth.current_user().is_none());
}

#[tokio::test]
async fn test_logout_clears_session_and_project_cache() {
    let server = MockServer::start().await;
    support::mount_projects(
        &server,
        serde_json::json!([support::project_json("1", "Brand Website", "in_progress")]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "issued-token",
            "user": user_json("u1", "pm@oneflow.dev")
        })))
        .mount(&server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::default());
    let context = setup_context(&server, tokens.clone()).await;
    context.auth.login("pm@oneflow.dev", "secret").await.expect("login succeeds");
    assert_eq!(context.projects.len(), 1);

    context.logout();

    assert!(context.auth.current_user().is_none());
    assert_eq!(tokens.load(), None);
    assert!(context.projects.is_empty());
}
