//! Cross-project analytics summary
//!
//! Shape of `GET /analytics`. Fields default to zero when the server omits
//! them; dashboard consumers treat every figure as best-effort.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSummary {
    pub total_projects: u64,
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub total_hours: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub total_revenue: f64,
}
