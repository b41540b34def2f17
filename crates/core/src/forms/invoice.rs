//! Customer invoice creation form

use chrono::NaiveDate;
use oneflow_common::validation::ValidationErrors;
use oneflow_domain::{InvoiceStatus, NewInvoice};

use super::{check_non_negative, optional_id, require_date, require_text};

/// Field state of the invoice dialog. `sales_order_id` is free-form; blank
/// means unlinked and the key is omitted from the payload entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    pub project_id: String,
    pub sales_order_id: String,
    pub number: String,
    pub customer: String,
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
    pub description: String,
}

impl InvoiceForm {
    pub fn for_project(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            sales_order_id: String::new(),
            number: String::new(),
            customer: String::new(),
            amount: 0.0,
            date: None,
            due_date: None,
            status: InvoiceStatus::Draft,
            description: String::new(),
        }
    }

    pub fn validate(&self) -> Result<NewInvoice, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require_text(&mut errors, "number", &self.number, "Invoice number is required");
        require_text(&mut errors, "customer", &self.customer, "Customer is required");
        require_date(&mut errors, "date", self.date, "Date is required");
        require_date(&mut errors, "dueDate", self.due_date, "Due date is required");
        check_non_negative(&mut errors, "amount", self.amount, "Amount must be positive");

        let (Some(date), Some(due_date)) = (self.date, self.due_date) else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(NewInvoice {
            project_id: self.project_id.clone(),
            sales_order_id: optional_id(&self.sales_order_id),
            number: self.number.trim().to_string(),
            customer: self.customer.trim().to_string(),
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
