//! File extension validation
//!
//! Membership check against a caller-supplied allowed list, compared
//! case-insensitively. Allowed entries may be written with or without a
//! leading dot ("png" and ".png" are equivalent).

use super::result::ValidationResult;

/// Validates a file name's extension against an allowed list.
///
/// The extension is the substring after the last `.` in `file_name`.
/// A name with no dot, or ending in a dot, has no extension and is invalid.
pub fn file_extension(file_name: &str, allowed: &[&str]) -> ValidationResult {
    let extension = match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => {
            return ValidationResult::invalid(format!(
                "{} has no file extension",
                file_name
            ))
        }
    };

    let matches = allowed.iter().any(|candidate| {
        let candidate = candidate.strip_prefix('.').unwrap_or(candidate);
        candidate.eq_ignore_ascii_case(extension)
    });

    if matches {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(format!(
            "{} is not an allowed file type",
            file_name
        ))
    }
}
