//! Timesheet entry form
//!
//! The only write path that advances a task's `hours_logged`: the server
//! recomputes the total from its timesheets, and consumers see it on their
//! next task fetch. The client never increments hours locally.

use chrono::NaiveDate;
use oneflow_common::validation::ValidationErrors;
use oneflow_domain::NewTimesheet;

use super::{check_non_negative, require_date, require_text};

#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetForm {
    pub project_id: String,
    pub task_id: String,
    pub employee: String,
    pub date: Option<NaiveDate>,
    pub hours: f64,
    pub billable: bool,
    pub description: String,
}

impl TimesheetForm {
    /// Create a form bound to the task it logs against.
    pub fn for_task(project_id: &str, task_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            task_id: task_id.to_string(),
            employee: String::new(),
            date: None,
            hours: 0.0,
            billable: true,
            description: String::new(),
        }
    }

    pub fn validate(&self) -> Result<NewTimesheet, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require_text(&mut errors, "projectId", &self.project_id, "Project is required");
        require_text(&mut errors, "taskId", &self.task_id, "Task is required");
        require_text(&mut errors, "employee", &self.employee, "Employee is required");
        require_date(&mut errors, "date", self.date, "Date is required");
        check_non_negative(&mut errors, "hours", self.hours, "Hours must be positive");

        let Some(date) = self.date else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(NewTimesheet {
            project_id: self.project_id.clone(),
            task_id: self.task_id.clone(),
            employee: self.employee.trim().to_string(),
            date,
            hours: self.hours,
            billable: self.billable,
            description: self.description.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::for_task(&self.project_id, &self.task_id);
    }
}
