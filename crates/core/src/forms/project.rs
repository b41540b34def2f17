//! Project creation/edit form

use chrono::NaiveDate;
use oneflow_common::validation::{FieldValidator, RangeValidator, ValidationErrors};
use oneflow_domain::{NewProject, ProjectStatus};

use super::{check_non_negative, require_date, require_text};

/// Field state of the project dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub manager: String,
    pub team: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: f64,
    pub spent: f64,
    pub progress: u8,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: ProjectStatus::Planned,
            manager: String::new(),
            team: Vec::new(),
            start_date: None,
            end_date: None,
            budget: 0.0,
            spent: 0.0,
            progress: 0,
        }
    }
}

impl ProjectForm {
    /// Validate and build the creation payload. Submission is blocked (no
    /// payload, no network call) while any field fails.
    pub fn validate(&self) -> Result<NewProject, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        require_text(&mut errors, "name", &self.name, "Project name is required");
        require_text(&mut errors, "manager", &self.manager, "Manager is required");
        require_date(&mut errors, "startDate", self.start_date, "Start date is required");
        require_date(&mut errors, "endDate", self.end_date, "End date is required");
        check_non_negative(&mut errors, "budget", self.budget, "Budget must be positive");
        check_non_negative(&mut errors, "spent", self.spent, "Spent must be positive");
        if RangeValidator::new(0u8, 100u8).validate(&self.progress).is_err() {
            errors.add("progress", "Progress must be between 0 and 100");
        }

        let (Some(start_date), Some(end_date)) = (self.start_date, self.end_date) else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(NewProject {
            name: self.name.trim().to_string(),
            status: self.status,
            manager: self.manager.trim().to_string(),
            team: self.team.clone(),
            start_date,
            end_date,
            budget: self.budget,
            spent: self.spent,
            progress: self.progress,
            description: self.description.clone(),
        })
    }

    /// Restore the dialog defaults (post-success behavior).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProjectForm {
        ProjectForm {
            name: "Brand Website".into(),
            manager: "Project Manager".into(),
            team: vec!["Designer".into(), "Developer".into()],
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31),
            budget: 100_000.0,
            progress: 45,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = filled().validate().expect("valid form");
        assert_eq!(payload.name, "Brand Website");
        assert_eq!(payload.progress, 45);
        assert_eq!(payload.team.len(), 2);
    }

    #[test]
    fn test_blank_required_fields_are_reported() {
        let errors = ProjectForm::default().validate().expect_err("invalid form");
        assert_eq!(errors.field("name"), Some("Project name is required"));
        assert_eq!(errors.field("manager"), Some("Manager is required"));
        assert_eq!(errors.field("startDate"), Some("Start date is required"));
        assert_eq!(errors.field("endDate"), Some("End date is required"));
    }

    #[test]
    fn test_progress_over_100_is_rejected() {
        let mut form = filled();
        form.progress = 150;
        let errors = form.validate().expect_err("invalid form");
        assert_eq!(errors.field("progress"), Some("Progress must be between 0 and 100"));
    }

    #[test]
    fn test_negative_budget_is_rejected() {
        let mut form = filled();
        form.budget = -1.0;
        let errors = form.validate().expect_err("invalid form");
        assert_eq!(errors.field("budget"), Some("Budget must be positive"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, ProjectForm::default());
    }
}
