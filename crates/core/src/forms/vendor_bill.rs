//! Vendor bill creation form

use chrono::NaiveDate;
use oneflow_common::validation::ValidationErrors;
use oneflow_domain::{NewVendorBill, VendorBillStatus};

use super::{check_non_negative, optional_id, require_date, require_text};

#[derive(Debug, Clone, PartialEq)]
pub struct VendorBillForm {
    pub project_id: String,
    pub purchase_order_id: String,
    pub number: String,
    pub vendor: String,
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub status: VendorBillStatus,
    pub description: String,
}

impl VendorBillForm {
    pub fn for_project(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            purchase_order_id: String::new(),
            number: String::new(),
            vendor: String::new(),
            amount: 0.0,
            date: None,
            due_date: None,
            status: VendorBillStatus::Draft,
            description: String::new(),
        }
    }

    pub fn validate(&self) -> Result<NewVendorBill, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require_text(&mut errors, "number", &self.number, "Bill number is required");
        require_text(&mut errors, "vendor", &self.vendor, "Vendor is required");
        require_date(&mut errors, "date", self.date, "Date is required");
        require_date(&mut errors, "dueDate", self.due_date, "Due date is required");
        check_non_negative(&mut errors, "amount", self.amount, "Amount must be positive");

        let (Some(date), Some(due_date)) = (self.date, self.due_date) else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(NewVendorBill {
            project_id: self.project_id.clone(),
            purchase_order_id: optional_id(&self.purchase_order_id),
            number: self.number.trim().to_string(),
            vendor: self.vendor.trim().to_string(),
            amount: self.amount,
            date,
            due_date,
            status: self.status,
            description: self.description.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::for_project(&self.project_id);
    }
}
