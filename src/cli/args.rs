//! CLI argument definitions using clap
//!
//! Commands:
//! - veridata check <RULE> <VALUE>
//! - veridata schema --schema <path> --record <path>
//! - veridata otp [--length N]
//! - veridata fake --template <path> --dataset <path>

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// veridata - strict, deterministic validation and test-data generation
#[derive(Parser, Debug)]
#[command(name = "veridata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Field validator selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckRule {
    /// Email address format
    Email,
    /// ASCII letters and digits only
    Alphanumeric,
    /// Exactly 10 digits
    Mobile,
    /// Password strength
    Password,
    /// ftp/http/https URL format
    Url,
    /// Credit card number (Luhn)
    Card,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one field validator against a value
    Check {
        /// Which rule to apply
        #[arg(value_enum)]
        rule: CheckRule,

        /// The value to validate
        value: String,
    },

    /// Validate a JSON record file against a JSON schema file
    Schema {
        /// Path to the schema file (JSON list of field rules)
        #[arg(long)]
        schema: PathBuf,

        /// Path to the record file (JSON object)
        #[arg(long)]
        record: PathBuf,
    },

    /// Generate a one-time password
    Otp {
        /// Number of digits
        #[arg(long, default_value_t = 6)]
        length: usize,
    },

    /// Generate a fake record from a template and a reference dataset
    Fake {
        /// Path to the template file (JSON object)
        #[arg(long)]
        template: PathBuf,

        /// Path to the reference dataset file (JSON object of arrays)
        #[arg(long)]
        dataset: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
