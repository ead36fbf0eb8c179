//! Password hashing and verification utilities
//!
//! Uses Argon2id with an explicitly stored salt. The salt lives in its own
//! credential column so a later password change re-hashes with the account's
//! existing salt instead of minting a new one.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Generate a fresh random salt in B64 form, suitable for storage
#[must_use]
pub fn generate_salt() -> String {
    SaltString::generate(&mut OsRng).as_str().to_string()
}

/// Hash a password with a previously stored salt
///
/// # Errors
/// Returns an error if the salt is not valid B64 or hashing fails
pub fn hash_with_salt(password: &str, salt: &str) -> Result<String, AppError> {
    let salt = SaltString::from_b64(salt)
        .map_err(|e| AppError::InvalidInput(format!("Invalid salt: {e}")))?;
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
