//! # Generator Errors

use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Data generation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// A template referenced a category the dataset does not define
    #[error("Category not found in reference dataset: {0}")]
    MissingCategory(String),

    /// A referenced category exists but holds no samples
    #[error("Category has no samples: {0}")]
    EmptyCategory(String),

    /// A dataset file could not be read or parsed
    #[error("Malformed dataset file '{path}': {reason}")]
    MalformedDataset { path: String, reason: String },
}
