//! Data generators
//!
//! OTP codes and fake records. Every generator has a `*_with` variant
//! taking an explicit `Rng`, so tests can seed a deterministic source and
//! callers needing stronger randomness can supply their own. The default
//! variants draw from `rand::thread_rng()` and are NOT cryptographically
//! secure.

mod dataset;
mod errors;
mod fake;
mod otp;

pub use dataset::ReferenceDataset;
pub use errors::{GeneratorError, GeneratorResult};
pub use fake::{generate_fake_record, generate_fake_record_with};
pub use otp::{generate_otp, generate_otp_with};
