//! Argon2id password hashing.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::RngCore;

use crate::errors::AppError;

const SALT_BYTES: usize = 16;

/// Hashes a plaintext password into a PHC-format Argon2id string.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; SALT_BYTES];
    rand::thread_rng().fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("salt encoding failed: {e}")))?;

    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing failed: {e}")))
}

/// Verifies a plaintext password against a stored PHC string.
/// A malformed stored hash verifies as false rather than erroring.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("securepass").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("securepass", &hash));
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = hash_password("securepass").unwrap();
        assert!(!verify_password("nope", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("securepass").unwrap();
        let b = hash_password("securepass").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_stored_hash_is_rejected() {
        assert!(!verify_password("securepass", "not-a-phc-string"));
    }
}
