//! Schema rule definitions
//!
//! Rules are held in declaration order. A schema serializes as a list of
//! rules rather than a map so the order survives a JSON round trip.

use serde::{Deserialize, Serialize};

/// Expected JSON type for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Any JSON number
    Number,
    /// JSON number with no fractional representation
    Integer,
    /// Boolean
    Boolean,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
        }
    }
}

/// String formats with dedicated checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringFormat {
    /// Must satisfy the email validator's pattern
    Email,
}

/// Per-field rule: a field name plus the constraints that apply to it.
///
/// Every constraint is optional; an absent constraint is never checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Field name in the record
    pub field: String,

    /// Whether the field must be present
    #[serde(default)]
    pub required: bool,

    /// Expected JSON type, checked before any other constraint
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,

    /// Minimum string length in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum string length in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Whether a numeric value must be an integer
    #[serde(default)]
    pub integer: bool,

    /// Inclusive numeric lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Inclusive numeric upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// String format check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
}

impl FieldRule {
    /// Create a rule with no constraints for the given field
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            required: false,
            field_type: None,
            min_length: None,
            max_length: None,
            integer: false,
            min: None,
            max: None,
            format: None,
        }
    }

    /// Create a rule that only requires presence
    pub fn required(field: impl Into<String>) -> Self {
        Self {
            required: true,
            ..Self::new(field)
        }
    }

    /// Require the field to be present
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Constrain the field's JSON type
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Constrain minimum string length (characters)
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Constrain maximum string length (characters)
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Require an integer value
    pub fn with_integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Constrain the inclusive numeric lower bound
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Constrain the inclusive numeric upper bound
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Require a string format
    pub fn with_format(mut self, format: StringFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// Complete schema: rules in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Field rules, applied in this order
    pub rules: Vec<FieldRule>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, preserving declaration order
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the schema has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
