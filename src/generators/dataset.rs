//! Reference dataset for fake-data generation
//!
//! A read-only mapping from category name to an ordered sequence of sample
//! values. Built in memory by the embedding application, or loaded once at
//! startup from a JSON object-of-arrays file:
//!
//! ```json
//! { "colors": ["red", "blue"], "ports": [80, 443] }
//! ```
//!
//! The generators only ever read from it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::observability::{Logger, Severity};

use super::errors::{GeneratorError, GeneratorResult};

/// Read-only category registry.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataset {
    categories: HashMap<String, Vec<Value>>,
}

impl ReferenceDataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category, replacing any previous samples under the same name.
    pub fn insert_category(&mut self, name: impl Into<String>, samples: Vec<Value>) {
        self.categories.insert(name.into(), samples);
    }

    /// Returns a category's samples, if the category exists.
    pub fn category(&self, name: &str) -> Option<&[Value]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    /// Returns true if the category exists.
    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the dataset has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Loads a dataset from a JSON file.
    ///
    /// The file must contain a single JSON object whose values are arrays.
    /// Anything else is a malformed dataset.
    pub fn load(path: &Path) -> GeneratorResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| GeneratorError::MalformedDataset {
            path: path.display().to_string(),
            reason: format!("Failed to read file: {}", e),
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|e| GeneratorError::MalformedDataset {
                path: path.display().to_string(),
                reason: format!("Invalid JSON: {}", e),
            })?;

        let object = value
            .as_object()
            .ok_or_else(|| GeneratorError::MalformedDataset {
                path: path.display().to_string(),
                reason: "expected a JSON object of arrays".into(),
            })?;

        let mut dataset = Self::new();
        for (name, samples) in object {
            let samples = samples
                .as_array()
                .ok_or_else(|| GeneratorError::MalformedDataset {
                    path: path.display().to_string(),
                    reason: format!("category '{}' is not an array", name),
                })?;
            dataset.insert_category(name.clone(), samples.clone());
        }

        let path_text = path.display().to_string();
        let category_count = dataset.len().to_string();
        Logger::log(
            Severity::Info,
            "dataset.loaded",
            &[("path", path_text.as_str()), ("categories", category_count.as_str())],
        );

        Ok(dataset)
    }
}

impl From<HashMap<String, Vec<Value>>> for ReferenceDataset {
    fn from(categories: HashMap<String, Vec<Value>>) -> Self {
        Self { categories }
    }
}
