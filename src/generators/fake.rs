//! Fake record generation
//!
//! A template maps output field names to either a category name (string),
//! which draws one sample uniformly from the reference dataset, or a
//! positive integer `n`, which draws a uniform random integer in `[1, n]`.
//! Template values of any other shape are skipped: the key is neither
//! copied to the output nor treated as an error.
//!
//! A category name the dataset does not define is a hard error, not a
//! silent omission.

use rand::Rng;
use serde_json::{Map, Value};

use super::dataset::ReferenceDataset;
use super::errors::{GeneratorError, GeneratorResult};

/// Template and output record type.
pub type Record = Map<String, Value>;

/// Generates a fake record from a template and reference dataset.
pub fn generate_fake_record(
    template: &Record,
    dataset: &ReferenceDataset,
) -> GeneratorResult<Record> {
    generate_fake_record_with(&mut rand::thread_rng(), template, dataset)
}

/// Generates a fake record from a caller-supplied random source.
pub fn generate_fake_record_with<R: Rng + ?Sized>(
    rng: &mut R,
    template: &Record,
    dataset: &ReferenceDataset,
) -> GeneratorResult<Record> {
    let mut output = Record::new();

    for (key, entry) in template {
        match entry {
            Value::String(category) => {
                let samples = dataset
                    .category(category)
                    .ok_or_else(|| GeneratorError::MissingCategory(category.clone()))?;
                if samples.is_empty() {
                    return Err(GeneratorError::EmptyCategory(category.clone()));
                }
                let pick = samples[rng.gen_range(0..samples.len())].clone();
                output.insert(key.clone(), pick);
            }
            Value::Number(number) => match number.as_u64() {
                Some(bound) if bound >= 1 => {
                    output.insert(key.clone(), Value::from(rng.gen_range(1..=bound)));
                }
                // Zero, negative, or fractional bounds fall into the
                // skipped class along with every other value type
                _ => {}
            },
            _ => {}
        }
    }

    Ok(output)
}
