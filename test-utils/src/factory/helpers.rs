//! Shared helper utilities for factory methods.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a password with deliberately weak Argon2id parameters.
///
/// Verification reads the parameters back out of the PHC string, so hashes made
/// here verify against the production verifier while keeping tests fast.
///
/// # Arguments
/// - `password` - Plain text password to hash
///
/// # Returns
/// - `String` - Argon2id PHC string
pub fn hash_password(password: &str) -> String {
    let params = Params::new(8, 1, 1, None).expect("valid argon2 params");
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .expect("hash test password")
        .to_string()
}
