//! Purchase order creation form

use chrono::NaiveDate;
use oneflow_common::validation::ValidationErrors;
use oneflow_domain::{NewPurchaseOrder, PurchaseOrderStatus};

use super::{check_non_negative, require_date, require_text};

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrderForm {
    pub project_id: String,
    pub number: String,
    pub vendor: String,
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub status: PurchaseOrderStatus,
    pub description: String,
}

impl PurchaseOrderForm {
    pub fn for_project(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            number: String::new(),
            vendor: String::new(),
            amount: 0.0,
            date: None,
            status: PurchaseOrderStatus::Draft,
            description: String::new(),
        }
    }

    pub fn validate(&self) -> Result<NewPurchaseOrder, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require_text(&mut errors, "number", &self.number, "Order number is required");
        require_text(&mut errors, "vendor", &self.vendor, "Vendor is required");
        require_date(&mut errors, "date", self.date, "Date is required");
        check_non_negative(&mut errors, "amount", self.amount, "Amount must be positive");

        let Some(date) = self.date else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(NewPurchaseOrder {
            project_id: self.project_id.clone(),
            number: self.number.trim().to_string(),
            vendor: self.vendor.trim().to_string(),
            amount: self.amount,
            date,
            status: self.status,
            description: self.description.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::for_project(&self.project_id);
    }
}
