//! Timesheets resource
//!
//! The create path here is the only way hours reach a task: the server
//! recomputes the task's logged total from its timesheets.

use std::sync::Arc;

use oneflow_domain::{NewTimesheet, Result, Timesheet, TimesheetPatch};
use serde::Deserialize;

use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
struct TimesheetsEnvelope {
    timesheets: Vec<Timesheet>,
}

#[derive(Debug, Deserialize)]
struct TimesheetEnvelope {
    timesheet: Timesheet,
}

/// Client for the `/timesheets` resource.
pub struct TimesheetsApi {
    gateway: Arc<HttpGateway>,
}

impl TimesheetsApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    /// Timesheets, optionally filtered by project and/or task.
    pub async fn list(
        &self,
        project_id: Option<&str>,
        task_id: Option<&str>,
    ) -> Result<Vec<Timesheet>> {
        let mut params = Vec::new();
        if let Some(id) = project_id {
            params.push(format!("projectId={}", urlencoding::encode(id)));
        }
        if let Some(id) = task_id {
            params.push(format!("taskId={}", urlencoding::encode(id)));
        }
        let path = if params.is_empty() {
            "/timesheets".to_string()
        } else {
            format!("/timesheets?{}", params.join("&"))
        };

        let envelope: TimesheetsEnvelope = self.gateway.get(&path).await?;
        Ok(envelope.timesheets)
    }

    pub async fn create(&self, timesheet: &NewTimesheet) -> Result<Timesheet> {
        let envelope: TimesheetEnvelope = self.gateway.post("/timesheets", timesheet).await?;
        Ok(envelope.timesheet)
    }

    pub async fn update(&self, id: &str, patch: &TimesheetPatch) -> Result<()> {
        self.gateway.put_discard(&format!("/timesheets/{}", id), patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(&format!("/timesheets/{}", id)).await
    }
}
