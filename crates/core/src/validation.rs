//! Form input validation
//!
//! A fluent validator used by the order form. Checks run in the order they
//! are chained; in fail-fast mode every check after the first failure is
//! skipped, so the result carries exactly one error.
//!
//! # Example
//!
//! ```rust
//! use once_cell::sync::Lazy;
//! use regex::Regex;
//! use srb_core::validation::Validator;
//!
//! static ZIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3}\s?[0-9]{2}$").unwrap());
//!
//! let result = Validator::fail_fast()
//!     .required_group("MISSING_ADDRESS", "Missing required address fields", &[
//!         ("street", Some("Kungsgatan 1")),
//!         ("postalCode", Some("411 19")),
//!     ])
//!     .pattern("postalCode", Some("411 19"), &ZIP, "INVALID_POSTAL_CODE", "Invalid postal code format")
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

use crate::error::{Error, ErrorCode, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The first recorded error, if any
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(Error::new(
                ErrorCode::ValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
    fail_fast: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// A value counts as present when it is set and not blank
fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

impl Validator {
    /// Create a validator that runs every check
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
            fail_fast: false,
        }
    }

    /// Create a validator that stops at the first failing check
    pub fn fail_fast() -> Self {
        Self {
            result: ValidationResult::new(),
            fail_fast: true,
        }
    }

    fn halted(&self) -> bool {
        self.fail_fast && !self.result.is_valid()
    }

    /// Validate that a field is present
    pub fn required(mut self, field: &str, value: Option<&str>) -> Self {
        if self.halted() {
            return self;
        }
        if !is_present(value) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Field is required".to_string(),
                code: "REQUIRED".to_string(),
                actual: None,
            });
        }
        self
    }

    /// Validate that every field of a group is present, reporting a single
    /// error for the group named after the first missing field
    pub fn required_group(
        mut self,
        code: &str,
        message: &str,
        fields: &[(&str, Option<&str>)],
    ) -> Self {
        if self.halted() {
            return self;
        }
        if let Some((field, _)) = fields.iter().find(|(_, value)| !is_present(*value)) {
            self.result.add_error(ValidationError {
                field: (*field).to_string(),
                message: message.to_string(),
                code: code.to_string(),
                actual: None,
            });
        }
        self
    }

    /// Validate against a compiled pattern. A missing value fails the check.
    pub fn pattern(
        mut self,
        field: &str,
        value: Option<&str>,
        pattern: &Regex,
        code: &str,
        message: &str,
    ) -> Self {
        if self.halted() {
            return self;
        }
        let value = value.unwrap_or_default();
        if !pattern.is_match(value) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: message.to_string(),
                code: code.to_string(),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate a numeric range
    pub fn range<T: PartialOrd + std::fmt::Display>(
        mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        if self.halted() {
            return self;
        }
        if value < min || value > max {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be between {} and {}", min, max),
                code: "RANGE".to_string(),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

    #[test]
    fn test_required_validation() {
        let result = Validator::new().required("name", Some("")).validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "REQUIRED");
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let result = Validator::new().required("name", Some("   ")).validate();
        assert!(!result.is_valid());

        let result = Validator::new().required("name", None).validate();
        assert!(!result.is_valid());
    }

    #[test]
    fn test_required_group_reports_first_missing() {
        let result = Validator::new()
            .required_group(
                "MISSING",
                "Missing fields",
                &[("a", Some("x")), ("b", None), ("c", None)],
            )
            .validate();

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "b");
        assert_eq!(result.errors()[0].code, "MISSING");
    }

    #[test]
    fn test_pattern_validation() {
        let result = Validator::new()
            .pattern("zip", Some("12a"), &DIGITS, "PATTERN", "digits only")
            .validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].actual.as_deref(), Some("12a"));
    }

    #[test]
    fn test_range_validation() {
        let result = Validator::new().range("step", 4, 1, 3).validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "RANGE");
    }

    #[test]
    fn test_collecting_mode_reports_everything() {
        let result = Validator::new()
            .required("a", None)
            .required("b", None)
            .validate();
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let result = Validator::fail_fast()
            .required("a", None)
            .required("b", None)
            .pattern("c", Some("x"), &DIGITS, "PATTERN", "digits only")
            .validate();

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.first_error().unwrap().field, "a");
    }

    #[test]
    fn test_to_result() {
        assert!(Validator::new().required("a", Some("x")).validate().to_result().is_ok());

        let err = Validator::new().required("a", None).validate().to_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
