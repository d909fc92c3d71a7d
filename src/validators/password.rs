//! Password strength validation
//!
//! The policy is configurable for embedders; the canonical check used by
//! [`password`] requires length >= 8 plus one character from each of the
//! four classes, and reports a single fixed message that does not say
//! which rule was missed.

use super::result::ValidationResult;

/// Special characters accepted by the canonical policy.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Fixed failure message; never enumerates the failed rule.
const STRENGTH_MESSAGE: &str = "Password must be at least 8 characters long and include \
     at least one uppercase letter, one lowercase letter, one digit, and one special character.";

/// Password requirements configuration
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
        }
    }
}

impl PasswordPolicy {
    /// Returns true if the password meets every enabled requirement.
    pub fn satisfies(&self, password: &str) -> bool {
        if password.chars().count() < self.min_length {
            return false;
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
            return false;
        }
        if self.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
            return false;
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }
        if self.require_special && !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            return false;
        }
        true
    }
}

/// Validates password strength against the canonical policy.
///
/// Failure always returns the same message regardless of which rule was
/// violated.
pub fn password(value: &str) -> ValidationResult {
    if PasswordPolicy::default().satisfies(value) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(STRENGTH_MESSAGE)
    }
}
