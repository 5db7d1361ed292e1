//! bcrypt password hashing, run off the async executor.
//!
//! Both hashing and verification are CPU-bound for tens of milliseconds at the
//! default cost, so each call is moved onto tokio's blocking pool.
//!
//! bcrypt only reads the first 72 bytes of its input, terminator included.
//! The non-truncating variants refuse longer passwords instead of cutting
//! them, so two passwords sharing a long prefix never match each other.

use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{BcryptError, non_truncating_hash, non_truncating_verify};
use tokio::task;

/// Longest password, in bytes, bcrypt can check in full.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Cost factor used when none is configured.
pub const DEFAULT_HASH_COST: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.bcrypt_cost)
    }

    /// Hashes a plaintext password with a fresh salt.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the password is longer than
    /// [`MAX_PASSWORD_BYTES`].
    pub async fn hash(&self, password: &str) -> ServiceResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        task::spawn_blocking(move || non_truncating_hash(password, cost))
            .await
            .map_err(|e| ServiceError::internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| match e {
                BcryptError::Truncation(_) => ServiceError::validation(format!(
                    "password: Password must be at most {} bytes",
                    MAX_PASSWORD_BYTES
                )),
                other => ServiceError::internal(format!("Password hashing failed: {}", other)),
            })
    }

    /// Checks a plaintext password against a stored hash.
    ///
    /// A malformed stored hash, or a candidate longer than
    /// [`MAX_PASSWORD_BYTES`], counts as a mismatch rather than an error, so
    /// callers can never distinguish it from a wrong password.
    pub async fn verify(&self, password: &str, password_hash: &str) -> ServiceResult<bool> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();

        let outcome = task::spawn_blocking(move || non_truncating_verify(password, &password_hash))
            .await
            .map_err(|e| ServiceError::internal(format!("Verification task failed: {}", e)))?;

        match outcome {
            Ok(matches) => Ok(matches),
            Err(BcryptError::Truncation(_)) => Ok(false),
            Err(e) => {
                tracing::warn!("Stored password hash could not be checked: {}", e);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = PasswordHasher::new(4);
        let stored = hasher.hash("secret123").await.unwrap();

        assert_ne!(stored, "secret123");
        assert!(hasher.verify("secret123", &stored).await.unwrap());
        assert!(!hasher.verify("secret124", &stored).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new(4);
        let first = hasher.hash("secret123").await.unwrap();
        let second = hasher.hash("secret123").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_configured_cost_is_used() {
        let stored = PasswordHasher::default().hash("secret123").await.unwrap();
        assert!(stored.starts_with("$2b$10$"));
    }

    #[tokio::test]
    async fn test_long_passwords_are_not_truncated() {
        let hasher = PasswordHasher::new(4);
        let at_limit = "a".repeat(MAX_PASSWORD_BYTES);
        let stored = hasher.hash(&at_limit).await.unwrap();
        assert!(hasher.verify(&at_limit, &stored).await.unwrap());

        let longer = format!("{at_limit}Y-totally-different");
        assert!(!hasher.verify(&longer, &stored).await.unwrap());

        let err = hasher.hash(&format!("{at_limit}X")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_length_limit_counts_bytes() {
        let hasher = PasswordHasher::new(4);
        // 36 chars, 72 bytes
        let wide = "é".repeat(36);
        assert!(hasher.hash(&wide).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_hash_is_a_mismatch() {
        let hasher = PasswordHasher::new(4);
        assert!(!hasher.verify("secret123", "not-a-bcrypt-hash").await.unwrap());
    }
}
