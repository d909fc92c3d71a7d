//! Record validator
//!
//! Walks the schema's rules in declaration order and applies each rule's
//! constraints to the record. Validation is short-circuiting: the first
//! violated rule produces the result and later fields are never examined.
//! Callers wanting an exhaustive report compose their own loop over
//! single-rule schemas rather than changing these semantics.

use serde_json::{Map, Value};

use crate::validators::{email, ValidationResult};

use super::types::{FieldRule, FieldType, Schema, StringFormat};

/// Record type validated against a schema.
pub type Record = Map<String, Value>;

/// Validator over a borrowed schema.
///
/// Does not mutate records. Validation is deterministic.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a record, reporting the first violated rule only.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        for rule in &self.schema.rules {
            match record.get(&rule.field) {
                None => {
                    if rule.required {
                        return ValidationResult::invalid(format!(
                            "{} is required.",
                            rule.field
                        ));
                    }
                    // Absent optional field: nothing else to check
                }
                Some(value) => {
                    let result = check_value(rule, value);
                    if result.is_invalid() {
                        return result;
                    }
                }
            }
        }

        ValidationResult::Valid
    }
}

/// Validates a record against a schema.
///
/// Convenience wrapper over [`SchemaValidator`].
pub fn validate_record(record: &Record, schema: &Schema) -> ValidationResult {
    SchemaValidator::new(schema).validate(record)
}

/// Applies a single rule's constraints to a present value.
///
/// Constraint order: type, string length, numeric bounds, integer-ness,
/// format. The first violation wins.
fn check_value(rule: &FieldRule, value: &Value) -> ValidationResult {
    if let Some(expected) = rule.field_type {
        if !type_matches(value, expected) {
            return ValidationResult::invalid(format!(
                "{} must be of type {}.",
                rule.field,
                expected.type_name()
            ));
        }
    }

    // Length constraints apply to string values only
    if let Some(text) = value.as_str() {
        let length = text.chars().count();

        if let Some(min_length) = rule.min_length {
            if length < min_length {
                return ValidationResult::invalid(format!(
                    "{} must be at least {} characters.",
                    rule.field, min_length
                ));
            }
        }

        if let Some(max_length) = rule.max_length {
            if length > max_length {
                return ValidationResult::invalid(format!(
                    "{} must be at most {} characters.",
                    rule.field, max_length
                ));
            }
        }
    }

    // Bound constraints apply to numeric values only
    if let Some(number) = value.as_f64() {
        if let Some(min) = rule.min {
            if number < min {
                return ValidationResult::invalid(format!(
                    "{} must be at least {}.",
                    rule.field, min
                ));
            }
        }

        if let Some(max) = rule.max {
            if number > max {
                return ValidationResult::invalid(format!(
                    "{} must be at most {}.",
                    rule.field, max
                ));
            }
        }
    }

    if rule.integer && !is_integer(value) {
        return ValidationResult::invalid(format!("{} must be an integer.", rule.field));
    }

    if let Some(StringFormat::Email) = rule.format {
        let is_email = value.as_str().map(|s| email(s).is_valid()).unwrap_or(false);
        if !is_email {
            return ValidationResult::invalid(format!(
                "{} must be a valid email address.",
                rule.field
            ));
        }
    }

    ValidationResult::Valid
}

/// Exact JSON type matching; no coercion.
fn type_matches(value: &Value, expected: FieldType) -> bool {
    match expected {
        FieldType::String => value.is_string(),
        FieldType::Number => value.is_number(),
        FieldType::Integer => is_integer(value),
        FieldType::Boolean => value.is_boolean(),
        FieldType::Array => value.is_array(),
        FieldType::Object => value.is_object(),
    }
}

/// A JSON integer: i64 or u64 representation, never a float.
fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().expect("test record is an object").clone()
    }

    fn user_schema() -> Schema {
        Schema::new()
            .rule(
                FieldRule::required("name")
                    .with_type(FieldType::String)
                    .with_min_length(2)
                    .with_max_length(40),
            )
            .rule(
                FieldRule::required("age")
                    .with_type(FieldType::Number)
                    .with_integer()
                    .with_min(0.0)
                    .with_max(150.0),
            )
            .rule(FieldRule::new("email").with_format(StringFormat::Email))
    }

    #[test]
    fn test_valid_record_passes() {
        let rec = record(json!({
            "name": "Alice",
            "age": 30,
            "email": "alice@example.com"
        }));

        assert!(validate_record(&rec, &user_schema()).is_valid());
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        let rec = record(json!({ "name": "Alice", "age": 30 }));
        assert!(validate_record(&rec, &user_schema()).is_valid());
    }

    #[test]
    fn test_missing_required_field() {
        let rec = record(json!({}));
        let schema = Schema::new().rule(FieldRule::required("name"));

        let result = validate_record(&rec, &schema);
        assert_eq!(result.message(), Some("name is required."));
    }

    #[test]
    fn test_first_error_wins_across_fields() {
        // Both fields violate their rules; only the first in schema order
        // is reported.
        let rec = record(json!({ "name": "A", "age": 900 }));

        let result = validate_record(&rec, &user_schema());
        assert_eq!(result.message(), Some("name must be at least 2 characters."));
    }

    #[test]
    fn test_rule_order_decides_reported_error() {
        let rec = record(json!({}));
        let forward = Schema::new()
            .rule(FieldRule::required("alpha"))
            .rule(FieldRule::required("beta"));
        let reverse = Schema::new()
            .rule(FieldRule::required("beta"))
            .rule(FieldRule::required("alpha"));

        assert_eq!(
            validate_record(&rec, &forward).message(),
            Some("alpha is required.")
        );
        assert_eq!(
            validate_record(&rec, &reverse).message(),
            Some("beta is required.")
        );
    }

    #[test]
    fn test_type_mismatch_no_coercion() {
        let rec = record(json!({ "name": 42, "age": 30 }));

        let result = validate_record(&rec, &user_schema());
        assert_eq!(result.message(), Some("name must be of type string."));
    }

    #[test]
    fn test_float_is_not_an_integer() {
        let rec = record(json!({ "name": "Alice", "age": 30.5 }));

        let result = validate_record(&rec, &user_schema());
        assert_eq!(result.message(), Some("age must be an integer."));
    }

    #[test]
    fn test_numeric_bounds_inclusive() {
        let schema = Schema::new().rule(FieldRule::new("score").with_min(0.0).with_max(100.0));

        assert!(validate_record(&record(json!({"score": 0})), &schema).is_valid());
        assert!(validate_record(&record(json!({"score": 100})), &schema).is_valid());
        assert_eq!(
            validate_record(&record(json!({"score": -1})), &schema).message(),
            Some("score must be at least 0.")
        );
        assert_eq!(
            validate_record(&record(json!({"score": 101})), &schema).message(),
            Some("score must be at most 100.")
        );
    }

    #[test]
    fn test_length_bounds() {
        let schema = Schema::new().rule(
            FieldRule::new("code")
                .with_min_length(3)
                .with_max_length(5),
        );

        assert!(validate_record(&record(json!({"code": "abc"})), &schema).is_valid());
        assert!(validate_record(&record(json!({"code": "ab"})), &schema).is_invalid());
        assert!(validate_record(&record(json!({"code": "abcdef"})), &schema).is_invalid());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let schema = Schema::new().rule(FieldRule::new("name").with_max_length(4));
        // four characters, more than four bytes
        assert!(validate_record(&record(json!({"name": "héllo"})), &schema).is_invalid());
        assert!(validate_record(&record(json!({"name": "héll"})), &schema).is_valid());
    }

    #[test]
    fn test_email_format() {
        let schema = Schema::new().rule(FieldRule::new("contact").with_format(StringFormat::Email));

        assert!(
            validate_record(&record(json!({"contact": "a@b.com"})), &schema).is_valid()
        );
        assert_eq!(
            validate_record(&record(json!({"contact": "not-an-email"})), &schema).message(),
            Some("contact must be a valid email address.")
        );
        // Non-string value cannot satisfy an email format
        assert!(validate_record(&record(json!({"contact": 9})), &schema).is_invalid());
    }

    #[test]
    fn test_empty_schema_accepts_any_record() {
        let rec = record(json!({ "anything": [1, 2, 3] }));
        assert!(validate_record(&rec, &Schema::new()).is_valid());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let rec = record(json!({ "name": "A", "age": 900 }));
        let schema = user_schema();

        let first = validate_record(&rec, &schema);
        for _ in 0..100 {
            assert_eq!(validate_record(&rec, &schema), first);
        }
    }
}
