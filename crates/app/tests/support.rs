//! Shared helpers for integration tests: a wiremock backend plus an
//! [`AppContext`] wired to it through an in-memory token store.

use std::sync::Arc;

use oneflow_app::AppContext;
use oneflow_domain::{ApiConfig, AuthConfig, Config};
use oneflow_infra::MemoryTokenStore;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn test_config(server: &MockServer) -> Config {
    Config {
        api: ApiConfig { base_url: server.uri() },
        auth: AuthConfig { token_path: "unused-by-memory-store".into() },
    }
}

/// Build a context against the mock backend. Initialization restores the
/// session (when `tokens` holds one) and primes the project cache, so mount
/// the relevant mocks first.
pub async fn setup_context(
    server: &MockServer,
    tokens: Arc<MemoryTokenStore>,
) -> Arc<AppContext> {
    AppContext::with_token_store(test_config(server), tokens)
        .await
        .expect("context initializes")
}

/// Mount an empty `GET /projects` so context init has something to prime
/// the cache from.
pub async fn mount_empty_projects(server: &MockServer) {
    mount_projects(server, serde_json::json!([])).await;
}

pub async fn mount_projects(server: &MockServer, projects: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "projects": projects })),
        )
        .mount(server)
        .await;
}

pub fn project_json(id: &str, name: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "status": status,
        "manager": "Project Manager",
        "team": ["Designer", "Developer"],
        "startDate": "2025-01-01",
        "endDate": "2025-03-31",
        "budget": 100000.0,
        "spent": 45000.0,
        "progress": 45,
        "description": "Complete website redesign"
    })
}

pub fn task_json(id: &str, project_id: &str, hours_logged: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "projectId": project_id,
        "title": "Design review",
        "description": "",
        "assignee": "Designer",
        "status": "in_progress",
        "priority": "medium",
        "dueDate": "2025-03-01",
        "hoursLogged": hours_logged,
        "estimatedHours": 80.0
    })
}

pub fn user_json(id: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": email,
        "name": "Project Manager",
        "role": "project_manager"
    })
}
