//! Password hashing.
//!
//! Hashes are Argon2 PHC strings with a random per-password salt, so the same
//! password never hashes to the same string twice.

use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;

use crate::error::FormError;
use crate::validate::enforce_text;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error("password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(argon2::password_hash::Error),
}

pub type Result<T> = std::result::Result<T, AuthError>;

/// Hash `password` for storage. Blank passwords are rejected.
pub fn hash_password(password: &str) -> Result<String> {
    enforce_text(password, "password")?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(AuthError::Hash)?;
    Ok(hash.to_string())
}

/// Check `password` against a hash produced by [`hash_password`].
///
/// A wrong password is `Ok(false)`; only blank inputs and unparsable hashes
/// are errors.
pub fn verify_password(pw_hash: &str, password: &str) -> Result<bool> {
    enforce_text(pw_hash, "pw_hash")?;
    enforce_text(password, "password")?;
    let parsed = PasswordHash::new(pw_hash).map_err(AuthError::MalformedHash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
