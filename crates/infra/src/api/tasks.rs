//! Tasks resource

use std::sync::Arc;

use oneflow_domain::{NewTask, Result, Task, TaskPatch};
use serde::Deserialize;

use super::scoped;
use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
struct TasksEnvelope {
    tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
struct TaskEnvelope {
    task: Task,
}

/// Client for the `/tasks` resource.
pub struct TasksApi {
    gateway: Arc<HttpGateway>,
}

impl TasksApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    /// Tasks, optionally filtered to one project.
    pub async fn list(&self, project_id: Option<&str>) -> Result<Vec<Task>> {
        let envelope: TasksEnvelope = self.gateway.get(&scoped("/tasks", project_id)).await?;
        Ok(envelope.tasks)
    }

    pub async fn get(&self, id: &str) -> Result<Task> {
        let envelope: TaskEnvelope = self.gateway.get(&format!("/tasks/{}", id)).await?;
        Ok(envelope.task)
    }

    pub async fn create(&self, task: &NewTask) -> Result<Task> {
        let envelope: TaskEnvelope = self.gateway.post("/tasks", task).await?;
        Ok(envelope.task)
    }

    pub async fn update(&self, id: &str, patch: &TaskPatch) -> Result<()> {
        self.gateway.put_discard(&format!("/tasks/{}", id), patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(&format!("/tasks/{}", id)).await
    }
}
