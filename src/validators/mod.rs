//! Field validators
//!
//! Every validator is a pure, total function: any input maps to a
//! [`ValidationResult`], never a panic. Invalidity is data, not a fault.
//!
//! # Design Principles
//!
//! - Total over all string inputs (V1)
//! - Deterministic: same input, same verdict (V2)
//! - No I/O, no network probes (V3)
//! - Messages are caller-facing, not localized

mod card;
mod field;
mod file;
mod password;
mod result;

pub use card::credit_card;
pub use field::{alphanumeric, email, mobile_number, not_empty, url};
pub use file::file_extension;
pub use password::{password, PasswordPolicy};
pub use result::ValidationResult;
