//! Password hashing and opaque token generation.
//!
//! Passwords are stored as Argon2 PHC strings, which embed their own salt and
//! parameters. Tokens are random alphanumeric strings used for email verification and
//! password resets.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::sync::LazyLock;

use crate::server::error::AppError;

/// Bytes of randomness in each password salt.
const SALT_LENGTH: usize = 16;

/// Length of verification and reset tokens.
const TOKEN_LENGTH: usize = 48;

/// How long a password reset token stays valid.
const RESET_TOKEN_TTL_MINUTES: i64 = 60;

/// Hashes a plaintext password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - Argon2 PHC string
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt_bytes: [u8; SALT_LENGTH] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::InternalError(format!("Failed to encode password salt: {}", e)))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Checks a plaintext password against a stored hash.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash could not be parsed");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Hash checked when a login names an unknown email, so the response takes as long as
/// a wrong password would.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("questkeeper-dummy-password").ok());

/// Runs a password verification that can never succeed.
pub fn verify_dummy_password(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

/// Generates a random alphanumeric token.
pub fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                            abcdefghijklmnopqrstuvwxyz\
                            0123456789";

    let mut rng = rand::rng();
    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Expiry instant for a reset token issued at `now`.
pub fn reset_token_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::minutes(RESET_TOKEN_TTL_MINUTES)
}
