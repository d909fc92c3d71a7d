//! Validation verdict type
//!
//! A validator distinguishes "valid" from "invalid with a reason" without
//! raising an error: both outcomes are ordinary values.

use std::fmt;

/// Outcome of a single validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Input satisfies the rule
    Valid,
    /// Input violates the rule; carries a human-readable reason
    Invalid(String),
}

impl ValidationResult {
    /// Create an invalid result with the given message
    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationResult::Invalid(message.into())
    }

    /// Returns true if the input passed
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns true if the input failed
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(msg) => Some(msg),
        }
    }

    /// Convert into a `Result` for callers that want `?` composition
    pub fn into_result(self) -> Result<(), String> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(msg) => Err(msg),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Valid => write!(f, "valid"),
            ValidationResult::Invalid(msg) => write!(f, "invalid: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_has_no_message() {
        assert!(ValidationResult::Valid.is_valid());
        assert_eq!(ValidationResult::Valid.message(), None);
    }

    #[test]
    fn test_invalid_carries_message() {
        let result = ValidationResult::invalid("name cannot be empty");
        assert!(result.is_invalid());
        assert_eq!(result.message(), Some("name cannot be empty"));
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::Valid.into_result().is_ok());
        assert_eq!(
            ValidationResult::invalid("bad").into_result(),
            Err("bad".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ValidationResult::Valid), "valid");
        assert_eq!(
            format!("{}", ValidationResult::invalid("bad")),
            "invalid: bad"
        );
    }
}
