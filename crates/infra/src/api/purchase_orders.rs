//! Purchase orders resource

use std::sync::Arc;

use oneflow_domain::{NewPurchaseOrder, PurchaseOrder, PurchaseOrderPatch, Result};
use serde::Deserialize;

use super::scoped;
use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseOrdersEnvelope {
    purchase_orders: Vec<PurchaseOrder>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseOrderEnvelope {
    purchase_order: PurchaseOrder,
}

/// Client for the `/purchase-orders` resource.
pub struct PurchaseOrdersApi {
    gateway: Arc<HttpGateway>,
}

impl PurchaseOrdersApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, project_id: Option<&str>) -> Result<Vec<PurchaseOrder>> {
        let envelope: PurchaseOrdersEnvelope =
            self.gateway.get(&scoped("/purchase-orders", project_id)).await?;
        Ok(envelope.purchase_orders)
    }

    pub async fn create(&self, order: &NewPurchaseOrder) -> Result<PurchaseOrder> {
        let envelope: PurchaseOrderEnvelope =
            self.gateway.post("/purchase-orders", order).await?;
        Ok(envelope.purchase_order)
    }

    pub async fn update(&self, id: &str, patch: &PurchaseOrderPatch) -> Result<()> {
        self.gateway.put_discard(&format!("/purchase-orders/{}", id), patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(&format!("/purchase-orders/{}", id)).await
    }
}
