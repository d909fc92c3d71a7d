//! String field validators
//!
//! Pattern-backed checks compile their regex once per process; character
//! class checks scan directly. None of these perform I/O.

use std::sync::OnceLock;

use regex::Regex;

use super::result::ValidationResult;

/// Local part, domain, and at least one dot in the domain; no whitespace
/// or extra `@` anywhere.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

/// Scheme prefix followed by one or more non-space characters.
fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(ftp|http|https)://\S+$").expect("url pattern compiles"))
}

/// Validates that a value is not empty or whitespace-only.
///
/// `field_name` is echoed in the failure message so callers can report
/// which field was blank.
pub fn not_empty(value: &str, field_name: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::invalid(format!("{} cannot be empty", field_name));
    }
    ValidationResult::Valid
}

/// Validates an email address.
///
/// Accepts `local@domain.tld` with no whitespace in either part and at
/// least one dot in the domain. This is a format check, not a deliverability
/// check.
pub fn email(value: &str) -> ValidationResult {
    if email_regex().is_match(value) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(format!("{} is Invalid", value))
    }
}

/// Validates that a string contains only ASCII letters and digits.
///
/// The empty string is invalid: there is no character satisfying the rule.
pub fn alphanumeric(value: &str) -> ValidationResult {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Only alphanumeric characters are allowed")
    }
}

/// Validates a mobile number: exactly 10 ASCII digits, any leading digit.
pub fn mobile_number(value: &str) -> ValidationResult {
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(format!("{} is not a valid mobile number", value))
    }
}

/// Validates a URL against the `ftp`, `http`, or `https` schemes.
///
/// Pure format check; the URL is never fetched.
pub fn url(value: &str) -> ValidationResult {
    if url_regex().is_match(value) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Invalid URL")
    }
}
