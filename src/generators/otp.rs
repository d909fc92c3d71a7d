//! One-time password generation
//!
//! Each digit is drawn independently and uniformly from 0-9. The default
//! source is `thread_rng`, which is NOT suitable for security-critical
//! codes; pass a stronger source (e.g. `rand::rngs::OsRng`) through
//! [`generate_otp_with`] where that matters.

use rand::Rng;

/// Generates an OTP of exactly `length` decimal digits.
///
/// `length == 0` yields the empty string. Never fails.
pub fn generate_otp(length: usize) -> String {
    generate_otp_with(&mut rand::thread_rng(), length)
}

/// Generates an OTP from a caller-supplied random source.
///
/// A seeded source makes the output deterministic for tests.
pub fn generate_otp_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
