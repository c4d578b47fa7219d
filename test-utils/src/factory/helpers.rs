//! Shared helper utilities for factory methods.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use std::sync::OnceLock;

/// Default plaintext password used by the account factories.
pub const DEFAULT_PASSWORD: &str = "password123!";

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

static DEFAULT_PASSWORD_HASH: OnceLock<String> = OnceLock::new();

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique
/// test identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a plaintext password with argon2, PHC format.
///
/// Argon2 is deliberately slow, so factories reuse the cached
/// `default_password_hash()` unless a test overrides the password.
pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("failed to hash test password")
        .to_string()
}

/// Returns the cached argon2 hash of [`DEFAULT_PASSWORD`].
pub fn default_password_hash() -> &'static str {
    DEFAULT_PASSWORD_HASH.get_or_init(|| hash_password(DEFAULT_PASSWORD))
}
