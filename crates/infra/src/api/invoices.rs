//! Customer invoices resource

use std::sync::Arc;

use oneflow_domain::{CustomerInvoice, InvoicePatch, NewInvoice, Result};
use serde::Deserialize;

use super::scoped;
use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvoicesEnvelope {
    customer_invoices: Vec<CustomerInvoice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvoiceEnvelope {
    customer_invoice: CustomerInvoice,
}

/// Client for the `/invoices` resource.
pub struct InvoicesApi {
    gateway: Arc<HttpGateway>,
}

impl InvoicesApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, project_id: Option<&str>) -> Result<Vec<CustomerInvoice>> {
        let envelope: InvoicesEnvelope =
            self.gateway.get(&scoped("/invoices", project_id)).await?;
        Ok(envelope.customer_invoices)
    }

    pub async fn create(&self, invoice: &NewInvoice) -> Result<CustomerInvoice> {
        let envelope: InvoiceEnvelope = self.gateway.post("/invoices", invoice).await?;
        Ok(envelope.customer_invoice)
    }

    pub async fn update(&self, id: &str, patch: &InvoicePatch) -> Result<()> {
        self.gateway.put_discard(&format!("/invoices/{}", id), patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(&format!("/invoices/{}", id)).await
    }
}
