//! Analytics endpoint

use std::sync::Arc;

use oneflow_domain::{AnalyticsSummary, Result};
use serde::Deserialize;

use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
struct AnalyticsEnvelope {
    analytics: AnalyticsSummary,
}

/// Client for `GET /analytics`.
pub struct AnalyticsApi {
    gateway: Arc<HttpGateway>,
}

impl AnalyticsApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    pub async fn summary(&self) -> Result<AnalyticsSummary> {
        let envelope: AnalyticsEnvelope = self.gateway.get("/analytics").await?;
        Ok(envelope.analytics)
    }
}
