//! Structured logging
//!
//! One JSON object per line, written synchronously with deterministic key
//! order. Pure validators never log; only the CLI wrapper and the dataset
//! loader emit events.

mod logger;

pub use logger::{Logger, Severity};
