//! Projects resource

use std::sync::Arc;

use async_trait::async_trait;
use oneflow_core::projects::ports::ProjectsGateway;
use oneflow_domain::{NewProject, Project, ProjectPatch, Result};
use serde::Deserialize;

use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
struct ProjectsEnvelope {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct ProjectEnvelope {
    project: Project,
}

/// Client for the `/projects` resource. Backs the shared
/// [`ProjectStore`](oneflow_core::ProjectStore) through the
/// [`ProjectsGateway`] port.
pub struct ProjectsApi {
    gateway: Arc<HttpGateway>,
}

impl ProjectsApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    /// All projects visible to the caller's auth scope.
    pub async fn list(&self) -> Result<Vec<Project>> {
        let envelope: ProjectsEnvelope = self.gateway.get("/projects").await?;
        Ok(envelope.projects)
    }

    pub async fn get(&self, id: &str) -> Result<Project> {
        let envelope: ProjectEnvelope =
            self.gateway.get(&format!("/projects/{}", id)).await?;
        Ok(envelope.project)
    }

    /// Create a project; returns the server-assigned record.
    pub async fn create(&self, project: &NewProject) -> Result<Project> {
        let envelope: ProjectEnvelope = self.gateway.post("/projects", project).await?;
        Ok(envelope.project)
    }

    pub async fn update(&self, id: &str, patch: &ProjectPatch) -> Result<()> {
        self.gateway.put_discard(&format!("/projects/{}", id), patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(&format!("/projects/{}", id)).await
    }
}

#[async_trait]
impl ProjectsGateway for ProjectsApi {
    async fn list(&self) -> Result<Vec<Project>> {
        self.list().await
    }

    async fn create(&self, project: &NewProject) -> Result<Project> {
        self.create(project).await
    }

    async fn update(&self, id: &str, patch: &ProjectPatch) -> Result<()> {
        self.update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete(id).await
    }
}
