//! Vendor bills resource

use std::sync::Arc;

use oneflow_domain::{NewVendorBill, Result, VendorBill, VendorBillPatch};
use serde::Deserialize;

use super::scoped;
use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VendorBillsEnvelope {
    vendor_bills: Vec<VendorBill>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VendorBillEnvelope {
    vendor_bill: VendorBill,
}

/// Client for the `/vendor-bills` resource.
pub struct VendorBillsApi {
    gateway: Arc<HttpGateway>,
}

impl VendorBillsApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, project_id: Option<&str>) -> Result<Vec<VendorBill>> {
        let envelope: VendorBillsEnvelope =
            self.gateway.get(&scoped("/vendor-bills", project_id)).await?;
        Ok(envelope.vendor_bills)
    }

    pub async fn create(&self, bill: &NewVendorBill) -> Result<VendorBill> {
        let envelope: VendorBillEnvelope = self.gateway.post("/vendor-bills", bill).await?;
        Ok(envelope.vendor_bill)
    }

    pub async fn update(&self, id: &str, patch: &VendorBillPatch) -> Result<()> {
        self.gateway.put_discard(&format!("/vendor-bills/{}", id), patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(&format!("/vendor-bills/{}", id)).await
    }
}
