//! Sales orders resource

use std::sync::Arc;

use oneflow_domain::{NewSalesOrder, Result, SalesOrder, SalesOrderPatch};
use serde::Deserialize;

use super::scoped;
use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SalesOrdersEnvelope {
    sales_orders: Vec<SalesOrder>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SalesOrderEnvelope {
    sales_order: SalesOrder,
}

/// Client for the `/sales-orders` resource.
pub struct SalesOrdersApi {
    gateway: Arc<HttpGateway>,
}

impl SalesOrdersApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, project_id: Option<&str>) -> Result<Vec<SalesOrder>> {
        let envelope: SalesOrdersEnvelope =
            self.gateway.get(&scoped("/sales-orders", project_id)).await?;
        Ok(envelope.sales_orders)
    }

    pub async fn create(&self, order: &NewSalesOrder) -> Result<SalesOrder> {
        let envelope: SalesOrderEnvelope = self.gateway.post("/sales-orders", order).await?;
        Ok(envelope.sales_order)
    }

    pub async fn update(&self, id: &str, patch: &SalesOrderPatch) -> Result<()> {
        self.gateway.put_discard(&format!("/sales-orders/{}", id), patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(&format!("/sales-orders/{}", id)).await
    }
}
