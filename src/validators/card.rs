//! Credit card validation via the Luhn checksum
//!
//! Input is stripped of every non-digit character first, so formatted
//! numbers ("4532 0151 1283 0366", "4532-0151-...") validate the same as
//! bare digit strings. An input with no digits at all is invalid — it is
//! never treated as a zero checksum.

use super::result::ValidationResult;

/// Validates a card number with the Luhn algorithm.
///
/// Scanning from the rightmost digit, every second digit is doubled
/// (starting with the second from the right); doubled digits above 9 have
/// 9 subtracted. The number is valid iff the digit sum is divisible by 10.
pub fn credit_card(value: &str) -> ValidationResult {
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.is_empty() {
        return ValidationResult::invalid(format!("{} is not a valid card number", value));
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    if sum % 10 == 0 {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(format!("{} is not a valid card number", value))
    }
}
