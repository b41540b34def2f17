//! Expense creation form

use chrono::NaiveDate;
use oneflow_common::validation::ValidationErrors;
use oneflow_domain::{ExpenseStatus, NewExpense};

use super::{check_non_negative, require_date, require_text};

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub project_id: String,
    pub employee: String,
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub category: String,
    pub description: String,
    pub billable: bool,
    pub status: ExpenseStatus,
}

impl ExpenseForm {
    pub fn for_project(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            employee: String::new(),
            amount: 0.0,
            date: None,
            category: String::new(),
            description: String::new(),
            billable: false,
            status: ExpenseStatus::Pending,
        }
    }

    pub fn validate(&self) -> Result<NewExpense, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require_text(&mut errors, "employee", &self.employee, "Employee is required");
        require_text(&mut errors, "category", &self.category, "Category is required");
        require_date(&mut errors, "date", self.date, "Date is required");
        check_non_negative(&mut errors, "amount", self.amount, "Amount must be positive");

        let Some(date) = self.date else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(NewExpense {
            project_id: self.project_id.clone(),
            employee: self.employee.trim().to_string(),
            amount: self.amount,
            date,
            category: self.category.trim().to_string(),
            description: self.description.clone(),
            billable: self.billable,
            status: self.status,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::for_project(&self.project_id);
    }
}
