//! Timesheet entries
//!
//! Creating a timesheet is the only way a task's `hours_logged` advances;
//! the server recomputes the total and the client picks it up on the next
//! fetch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: String,
    pub project_id: String,
    pub task_id: String,
    pub employee: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub billable: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimesheet {
    pub project_id: String,
    pub task_id: String,
    pub employee: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub billable: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
