//! Task creation form

use chrono::NaiveDate;
use oneflow_common::validation::ValidationErrors;
use oneflow_domain::{NewTask, TaskPriority, TaskStatus};

use super::{check_non_negative, require_date, require_text};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            title: String::new(),
            description: String::new(),
            assignee: String::new(),
            status: TaskStatus::New,
            priority: TaskPriority::Medium,
            due_date: None,
            estimated_hours: 0.0,
        }
    }
}

impl TaskForm {
    pub fn validate(&self) -> Result<NewTask, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require_text(&mut errors, "projectId", &self.project_id, "Project is required");
        require_text(&mut errors, "title", &self.title, "Title is required");
        require_text(&mut errors, "assignee", &self.assignee, "Assignee is required");
        require_date(&mut errors, "dueDate", self.due_date, "Due date is required");
        check_non_negative(
            &mut errors,
            "estimatedHours",
            self.estimated_hours,
            "Estimated hours must be positive",
        );

        let Some(due_date) = self.due_date else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(NewTask {
            project_id: self.project_id.clone(),
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            assignee: self.assignee.trim().to_string(),
            status: self.status,
            priority: self.priority,
            due_date,
            estimated_hours: self.estimated_hours,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
