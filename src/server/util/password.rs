use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a plain password with Argon2id and a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC string suitable for `user.password_hash`
/// - `Err(AppError::PasswordHashErr)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHashErr(e.to_string()))
}

/// Checks a plain password against a stored PHC string.
///
/// Parameters are read from the stored hash, so hashes created with other Argon2
/// settings still verify.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::PasswordHashErr)` - Stored hash is not a valid PHC string
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed =
        PasswordHash::new(password_hash).map_err(|e| AppError::PasswordHashErr(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
