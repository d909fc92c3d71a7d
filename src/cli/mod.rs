//! CLI module for veridata
//!
//! Thin wrapper over the library:
//! - check: run one field validator against a value
//! - schema: validate a JSON record file against a JSON schema file
//! - otp: generate a one-time password
//! - fake: generate a fake record from a template and dataset
//!
//! Exit codes: 0 valid/success, 1 invalid input, 2 operational failure.

mod args;
mod commands;
mod errors;

pub use args::{CheckRule, Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
///
/// Returns the process exit code; operational failures surface as errors
/// for `main` to print.
pub fn run() -> CliResult<i32> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
