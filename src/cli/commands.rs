//! CLI command implementations
//!
//! Commands print one JSON document to stdout and map outcomes to exit
//! codes: 0 valid/success, 1 invalid input, 2 operational failure
//! (returned as an error for main to report).

use std::fs;
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::generators::{generate_fake_record, generate_otp, ReferenceDataset};
use crate::observability::{Logger, Severity};
use crate::schema::{validate_record, Schema};
use crate::validators::{
    alphanumeric, credit_card, email, mobile_number, password, url, ValidationResult,
};

use super::args::{CheckRule, Command};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command. Returns the process exit code.
pub fn run_command(command: Command) -> CliResult<i32> {
    match command {
        Command::Check { rule, value } => check(rule, &value),
        Command::Schema { schema, record } => schema_check(&schema, &record),
        Command::Otp { length } => otp(length),
        Command::Fake { template, dataset } => fake(&template, &dataset),
    }
}

fn check(rule: CheckRule, value: &str) -> CliResult<i32> {
    let result = match rule {
        CheckRule::Email => email(value),
        CheckRule::Alphanumeric => alphanumeric(value),
        CheckRule::Mobile => mobile_number(value),
        CheckRule::Password => password(value),
        CheckRule::Url => url(value),
        CheckRule::Card => credit_card(value),
    };

    report_result(&result)
}

fn schema_check(schema_path: &Path, record_path: &Path) -> CliResult<i32> {
    let schema: Schema = read_json(schema_path)?;
    let record: Value = read_json(record_path)?;

    let record = record.as_object().ok_or_else(|| {
        CliError::parse_error(format!(
            "{}: record must be a JSON object",
            record_path.display()
        ))
    })?;

    report_result(&validate_record(record, &schema))
}

fn otp(length: usize) -> CliResult<i32> {
    let code = generate_otp(length);
    println!("{}", json!({ "otp": code }));
    Ok(0)
}

fn fake(template_path: &Path, dataset_path: &Path) -> CliResult<i32> {
    let dataset = ReferenceDataset::load(dataset_path)?;

    let template: Value = read_json(template_path)?;
    let template: &Map<String, Value> = template.as_object().ok_or_else(|| {
        CliError::parse_error(format!(
            "{}: template must be a JSON object",
            template_path.display()
        ))
    })?;

    let record = generate_fake_record(template, &dataset)?;
    println!("{}", Value::Object(record));
    Ok(0)
}

/// Print a validation result as JSON and map it to an exit code.
fn report_result(result: &ValidationResult) -> CliResult<i32> {
    match result {
        ValidationResult::Valid => {
            println!("{}", json!({ "status": "valid" }));
            Ok(0)
        }
        ValidationResult::Invalid(message) => {
            Logger::log(
                Severity::Warn,
                "validation.failed",
                &[("reason", message.as_str())],
            );
            println!("{}", json!({ "status": "invalid", "message": message }));
            Ok(1)
        }
    }
}

/// Read and deserialize a JSON file, mapping failures to CLI errors.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io_error(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::parse_error(format!("{}: {}", path.display(), e)))
}
