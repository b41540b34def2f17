// Field validators - reusable validation components
use std::fmt::Display;

use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Range validator for numeric types
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Default for RangeValidator<T>
where
    T: PartialOrd + Display,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display,
{
    /// Create a new range validator with no constraints
    pub fn empty() -> Self {
        Self { min: None, max: None }
    }

    /// Create a new range validator with min and max values
    pub fn new(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Set minimum value
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        if let Some(ref min) = self.min {
            if value < min {
                return Err(format!("Value must be at least {}", min));
            }
        }

        if let Some(ref max) = self.max {
            if value > max {
                return Err(format!("Value must not exceed {}", max));
            }
        }

        Ok(())
    }
}

/// String validator with various constraints
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    not_empty: bool,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { min_length: None, max_length: None, not_empty: false, trim: true }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set minimum length
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set maximum length
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value.as_str() };

        if self.not_empty && val.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        if let Some(min) = self.min_length {
            if val.len() < min {
                return Err(format!("Length must be at least {} characters", min));
            }
        }

        if let Some(max) = self.max_length {
            if val.len() > max {
                return Err(format!("Length must not exceed {} characters", max));
            }
        }

        Ok(())
    }
}

impl FieldValidator<&str> for StringValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        self.validate(&value.to_string())
    }
}

/// Static email regex pattern compiled once at first use
static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<String> for EmailValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        if !EMAIL_REGEX.is_match(value) {
            return Err("Invalid email format".to_string());
        }

        Ok(())
    }
}

impl FieldValidator<&str> for EmailValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        self.validate(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validator_min() {
        let validator = RangeValidator::empty().min(0.0);

        assert!(validator.validate(&15.0).is_ok());
        assert!(validator.validate(&0.0).is_ok());
        assert!(validator.validate(&-5.0).is_err());
    }

    #[test]
    fn test_range_validator_between() {
        let validator = RangeValidator::new(0u8, 100u8);

        assert!(validator.validate(&50).is_ok());
        assert!(validator.validate(&0).is_ok());
        assert!(validator.validate(&100).is_ok());
        assert!(validator.validate(&150).is_err());
    }

    #[test]
    fn test_string_validator_not_empty() {
        let validator = StringValidator::new().not_empty();

        assert!(validator.validate(&"hello".to_string()).is_ok());
        assert!(validator.validate(&"".to_string()).is_err());
        assert!(validator.validate(&"   ".to_string()).is_err()); // Whitespace only
    }

    #[test]
    fn test_string_validator_lengths() {
        let validator = StringValidator::new().min_length(3).max_length(10);

        assert!(validator.validate(&"hello".to_string()).is_ok());
        assert!(validator.validate(&"hi".to_string()).is_err());
        assert!(validator.validate(&"hello world".to_string()).is_err());
    }

    #[test]
    fn test_email_validator() {
        let validator = EmailValidator;

        assert!(validator.validate(&"user@example.com".to_string()).is_ok());
        assert!(validator.validate(&"user.name+tag@example.co.uk".to_string()).is_ok());
        assert!(validator.validate(&"invalid-email".to_string()).is_err());
        assert!(validator.validate(&"@example.com".to_string()).is_err());
    }
}
