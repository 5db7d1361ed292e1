//! JWT token utilities for authentication and authorization.
//!
//! Tokens are HS256-signed, carry the identity's id and email, and expire a
//! fixed number of seconds after issuance. Nothing is stored server-side: a
//! token is valid exactly when its signature checks out and `exp` has not
//! passed.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};

/// JWT Claims structure identifying an authenticated user
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// User email
    pub email: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

/// JWT token utility for creating and validating tokens
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance signing with `secret`.
    pub fn new(secret: &str, expires_in_seconds: u64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.jwt_expires_in_seconds)
    }

    /// Token lifetime in seconds.
    pub fn expires_in(&self) -> u64 {
        self.expires_in_seconds
    }

    /// Generate a new JWT token for a user, issued now
    pub fn generate_token(&self, user_id: &str, email: &str) -> ServiceResult<String> {
        self.generate_token_at(user_id, email, Utc::now())
    }

    /// Generate a token as if it had been issued at `issued_at`.
    pub fn generate_token_at(
        &self,
        user_id: &str,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> ServiceResult<String> {
        let exp = issued_at + Duration::seconds(self.expires_in_seconds as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: exp.timestamp().max(0) as usize,
            iat: issued_at.timestamp().max(0) as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a JWT token
    pub fn validate_token(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| ServiceError::invalid_token(e.to_string()))
    }
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issued_token_round_trips_claims() {
        let jwt = JwtUtils::new(SECRET, 3600);
        let token = jwt.generate_token("user-1", "alice@example.com").unwrap();

        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.user_id(), "user-1");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let jwt = JwtUtils::new(SECRET, 3600);
        let issued_at = Utc::now() - Duration::minutes(61);
        let token = jwt
            .generate_token_at("user-1", "alice@example.com", issued_at)
            .unwrap();

        let err = jwt.validate_token(&token).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidToken { .. }));
    }

    #[test]
    fn test_token_still_valid_just_before_expiry() {
        let jwt = JwtUtils::new(SECRET, 3600);
        let issued_at = Utc::now() - Duration::minutes(59);
        let token = jwt
            .generate_token_at("user-1", "alice@example.com", issued_at)
            .unwrap();

        assert!(jwt.validate_token(&token).is_ok());
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let issuer = JwtUtils::new("some-other-secret", 3600);
        let verifier = JwtUtils::new(SECRET, 3600);
        let token = issuer.generate_token("user-1", "alice@example.com").unwrap();

        let err = verifier.validate_token(&token).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidToken { .. }));
    }

    #[test]
    fn test_tampered_and_garbage_tokens_rejected() {
        let jwt = JwtUtils::new(SECRET, 3600);
        let token = jwt.generate_token("user-1", "alice@example.com").unwrap();

        let other = jwt.generate_token("user-2", "mallory@example.com").unwrap();
        let forged_payload = other.split('.').nth(1).unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        parts[1] = forged_payload;
        let tampered = parts.join(".");

        assert!(jwt.validate_token(&tampered).is_err());
        assert!(jwt.validate_token("not-a-token").is_err());
        assert!(jwt.validate_token("").is_err());
    }
}
