//! Expenses resource

use std::sync::Arc;

use oneflow_domain::{Expense, ExpensePatch, NewExpense, Result};
use serde::Deserialize;

use super::scoped;
use crate::http::HttpGateway;

#[derive(Debug, Deserialize)]
struct ExpensesEnvelope {
    expenses: Vec<Expense>,
}

#[derive(Debug, Deserialize)]
struct ExpenseEnvelope {
    expense: Expense,
}

/// Client for the `/expenses` resource.
pub struct ExpensesApi {
    gateway: Arc<HttpGateway>,
}

impl ExpensesApi {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, project_id: Option<&str>) -> Result<Vec<Expense>> {
        let envelope: ExpensesEnvelope =
            self.gateway.get(&scoped("/expenses", project_id)).await?;
        Ok(envelope.expenses)
    }

    pub async fn create(&self, expense: &NewExpense) -> Result<Expense> {
        let envelope: ExpenseEnvelope = self.gateway.post("/expenses", expense).await?;
        Ok(envelope.expense)
    }

    pub async fn update(&self, id: &str, patch: &ExpensePatch) -> Result<()> {
        self.gateway.put_discard(&format!("/expenses/{}", id), patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(&format!("/expenses/{}", id)).await
    }
}
