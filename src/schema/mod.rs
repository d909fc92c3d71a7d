//! Declarative record validation
//!
//! A [`Schema`] is an ordered list of per-field rules applied to a JSON
//! record. Validation is short-circuiting: the first violated rule across
//! all fields is reported and nothing after it is evaluated.
//!
//! # Design Principles
//!
//! - Rule order is contractual: it decides which error a caller sees (R1)
//! - First-error-wins, never an accumulated report (R2)
//! - Exact type matching, no coercion (R3)
//! - The record is never mutated

mod types;
mod validator;

pub use types::{FieldRule, FieldType, Schema, StringFormat};
pub use validator::{validate_record, SchemaValidator};
