//! Port interface for the projects resource

use async_trait::async_trait;
use oneflow_domain::{NewProject, Project, ProjectPatch, Result};

/// Trait for the `/projects` backend resource
#[async_trait]
pub trait ProjectsGateway: Send + Sync {
    /// Fetch the full project list visible to the caller
    async fn list(&self) -> Result<Vec<Project>>;

    /// Create a project; the server assigns the id
    async fn create(&self, project: &NewProject) -> Result<Project>;

    /// Partial update via full-record PUT
    async fn update(&self, id: &str, patch: &ProjectPatch) -> Result<()>;

    /// Delete with no soft-delete or undo
    async fn delete(&self, id: &str) -> Result<()>;
}
