//! Password hashing and verification utilities
//!
//! Uses PBKDF2-HMAC-SHA256 and stores the result as a PHC string
//! (`$pbkdf2-sha256$i=<rounds>,l=<len>$<salt>$<hash>`), so the iteration count
//! and salt travel with the hash and verification keeps working if
//! [`PBKDF2_ROUNDS`] changes later.

use std::sync::Arc;

use pbkdf2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Params, Pbkdf2,
};
use rand::{rngs::OsRng, RngCore};
use tokio::sync::Semaphore;
use tracing::{error, warn};

use crate::error::AppError;

/// PBKDF2 iteration count for newly created hashes
pub const PBKDF2_ROUNDS: u32 = 30_000;

/// Derived key length in bytes
const OUTPUT_LENGTH: usize = 32;

/// Salt length in bytes
const SALT_LENGTH: usize = 16;

/// Default number of hashes allowed to run at once
const DEFAULT_HASH_CONCURRENCY: usize = 4;

/// Well-formed hash that no password matches, verified when a login names an
/// unknown user so both failure paths pay for one full KDF run
const UNKNOWN_USER_HASH: &str =
    "$pbkdf2-sha256$i=30000,l=32$c2FsdHNhbHRzYWx0c2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Hash a password using PBKDF2-SHA256 with a fresh random salt
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; SALT_LENGTH];
    OsRng.fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Salt encoding failed: {e}")))?;

    let params = Params {
        rounds: PBKDF2_ROUNDS,
        output_length: OUTPUT_LENGTH,
    };

    Pbkdf2
        .hash_password_customized(
            password.as_bytes(),
            Some(Algorithm::Pbkdf2Sha256.ident()),
            None,
            params,
            &salt,
        )
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// The salt and iteration count are taken from the stored string and the
/// digests are compared in constant time. A malformed or foreign hash never
/// matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "Stored password hash is malformed");
            return false;
        }
    };

    Pbkdf2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Password service for dependency injection
///
/// Runs the KDF on Tokio's blocking pool, with at most `max_concurrency`
/// computations in flight so registration bursts cannot starve other requests.
#[derive(Debug, Clone)]
pub struct PasswordService {
    permits: Arc<Semaphore>,
}

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_concurrency.max(1))),
        }
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails or the worker task dies
    pub async fn hash(&self, password: &str) -> Result<String, AppError> {
        let _permit = self.permits.acquire().await.map_err(AppError::internal)?;
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(AppError::internal)?
    }

    /// Verify a password against a hash
    pub async fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(_permit) = self.permits.acquire().await else {
            error!("Password worker pool is closed");
            return false;
        };
        let password = password.to_owned();
        let hash = hash.to_owned();

        match tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await {
            Ok(matches) => matches,
            Err(e) => {
                error!(error = %e, "Password verification task failed");
                false
            }
        }
    }

    /// Spend one verification on a login for a username that does not exist
    pub async fn verify_unknown_user(&self, password: &str) {
        let _ = self.verify(password, UNKNOWN_USER_HASH).await;
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_CONCURRENCY)
    }
}

/// Validate password strength
///
/// Returns `Ok(())` if the password meets requirements:
/// - 8 to 128 characters
/// - Contains at least one letter
/// - Contains at least one digit
///
/// # Errors
/// Returns a validation error if the password doesn't meet requirements
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let length = password.chars().count();

    if length < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    if length > 128 {
        return Err(AppError::Validation(
            "Password must be at most 128 characters long".to_string(),
        ));
    }

    if !password.chars().any(char::is_alphabetic) {
        return Err(AppError::Validation(
            "Password must contain at least one letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Password must contain at least one digit".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_format() {
        let hash = hash_password("secret123").unwrap();

        // Algorithm and parameters are embedded in the hash string
        assert!(hash.starts_with("$pbkdf2-sha256$i=30000,l=32$"));
    }

    #[test]
    fn test_hash_password_is_salted() {
        let hash = hash_password("secret123").unwrap();
        let hash2 = hash_password("secret123").unwrap();

        assert_ne!(hash, hash2);
        assert!(verify_password("secret123", &hash));
        assert!(verify_password("secret123", &hash2));
    }

    #[test]
    fn test_verify_password_success() {
        let password = "SecurePassword123!";
        let hash = hash_password(password).unwrap();

        assert!(verify_password(password, &hash));
    }

    #[test]
    fn test_verify_password_failure() {
        let hash = hash_password("secret123").unwrap();

        assert!(!verify_password("secret124", &hash));
        assert!(!verify_password("", &hash));
    }

    #[test]
    fn test_verify_honours_embedded_rounds() {
        let salt = SaltString::encode_b64(b"0123456789abcdef").unwrap();
        let params = Params {
            rounds: 1_000,
            output_length: OUTPUT_LENGTH,
        };
        let hash = Pbkdf2
            .hash_password_customized(
                b"legacy-pass1",
                Some(Algorithm::Pbkdf2Sha256.ident()),
                None,
                params,
                &salt,
            )
            .unwrap()
            .to_string();

        assert!(hash.contains("i=1000"));
        assert!(verify_password("legacy-pass1", &hash));
        assert!(!verify_password("legacy-pass2", &hash));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        assert!(!verify_password("secret123", ""));
        assert!(!verify_password("secret123", "not a hash"));
        assert!(!verify_password("secret123", "$pbkdf2-sha256$i=abc$$"));
        assert!(!verify_password(
            "secret123",
            "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHRzYWx0$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
        ));
    }

    #[test]
    fn test_unknown_user_hash_is_well_formed() {
        let parsed = PasswordHash::new(UNKNOWN_USER_HASH).unwrap();
        let params = Params::try_from(&parsed).unwrap();
        assert_eq!(params.rounds, PBKDF2_ROUNDS);
        assert_eq!(parsed.hash.unwrap().len(), OUTPUT_LENGTH);
        assert!(!verify_password("secret123", UNKNOWN_USER_HASH));
    }

    #[tokio::test]
    async fn test_password_service() {
        let service = PasswordService::new(2);

        let hash = service.hash("secret123").await.unwrap();
        assert!(service.verify("secret123", &hash).await);
        assert!(!service.verify("wrong", &hash).await);
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let service = PasswordService::new(0);
        assert_eq!(service.permits.available_permits(), 1);
    }

    #[test]
    fn test_validate_password_strength_valid() {
        assert!(validate_password_strength("secret123").is_ok());
        assert!(validate_password_strength("Abcdefg1").is_ok());
        assert!(validate_password_strength("MyP@ssw0rd!").is_ok());
    }

    #[test]
    fn test_validate_password_strength_too_short() {
        let result = validate_password_strength("abc12");
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("8 characters")));
    }

    #[test]
    fn test_validate_password_strength_too_long() {
        let long = format!("a1{}", "x".repeat(127));
        let result = validate_password_strength(&long);
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("128")));
    }

    #[test]
    fn test_validate_password_strength_no_letter() {
        let result = validate_password_strength("12345678");
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("letter")));
    }

    #[test]
    fn test_validate_password_strength_no_digit() {
        let result = validate_password_strength("NoDigitsHere");
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("digit")));
    }
}
