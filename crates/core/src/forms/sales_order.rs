//! Sales order creation form

use chrono::NaiveDate;
use oneflow_common::validation::ValidationErrors;
use oneflow_domain::{NewSalesOrder, SalesOrderStatus};

use super::{check_non_negative, require_date, require_text};

/// Field state of the sales order dialog; `project_id` comes from the
/// project view that opened it.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesOrderForm {
    pub project_id: String,
    pub number: String,
    pub customer: String,
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub status: SalesOrderStatus,
    pub description: String,
}

impl SalesOrderForm {
    /// Create a form bound to the project it was opened from.
    pub fn for_project(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            number: String::new(),
            customer: String::new(),
            amount: 0.0,
            date: None,
            status: SalesOrderStatus::Draft,
            description: String::new(),
        }
    }

    pub fn validate(&self) -> Result<NewSalesOrder, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require_text(&mut errors, "number", &self.number, "Order number is required");
        require_text(&mut errors, "customer", &self.customer, "Customer is required");
        require_date(&mut errors, "date", self.date, "Date is required");
        check_non_negative(&mut errors, "amount", self.amount, "Amount must be positive");

        let Some(date) = self.date else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(NewSalesOrder {
            project_id: self.project_id.clone(),
            number: self.number.trim().to_string(),
            customer: self.customer.trim().to_string(),
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
