//! Validation framework
//!
//! Field validators compose into per-form schemas; a failed schema yields a
//! [`ValidationErrors`] with one message per offending field. Validation
//! always runs before submission, so a failing payload never reaches the
//! network.

use std::fmt;

use serde::{Deserialize, Serialize};

mod validators;

pub use validators::{EmailValidator, FieldValidator, RangeValidator, StringValidator};

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Accumulated field-level validation failures.
///
/// Ordered by insertion so messages render in form-field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError { field: field.into(), message: message.into() });
    }

    /// Run `validator` against `value`, recording a failure under `field`.
    pub fn check<T>(&mut self, field: &str, value: &T, validator: &impl FieldValidator<T>) {
        if let Err(message) = validator.validate(value) {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Consume into `Err(self)` when any failure was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "Name is required");
        errors.add("amount", "Amount must be positive");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.field("name"), Some("Name is required"));
        assert_eq!(errors.field("missing"), None);
        let rendered = errors.to_string();
        assert!(rendered.starts_with("name: "));
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("date", "Date is required");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_check_records_validator_failure() {
        let mut errors = ValidationErrors::new();
        errors.check("progress", &150u8, &RangeValidator::new(0u8, 100u8));
        assert_eq!(errors.len(), 1);
        assert!(errors.field("progress").is_some());
    }
}
