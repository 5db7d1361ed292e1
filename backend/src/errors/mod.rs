//! Global application error types.
//!
//! Every service returns `ServiceResult`, and the API layer turns a
//! `ServiceError` into a status code and JSON body in one place
//! (`api::common::service_error_to_http`).

use thiserror::Error;
use validator::ValidationErrors;

/// Generic service error that can be used across all entities
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    /// An identity with this email is already registered.
    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    /// Unknown email or wrong password. The two are deliberately not told apart.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Malformed, tampered, wrongly signed or expired token.
    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },

    /// The persistence layer could not complete the request. Callers may retry.
    #[error("Store unavailable: {source}")]
    StoreUnavailable {
        #[from]
        source: anyhow::Error,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the caller may retry the same request later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(validation_errors: ValidationErrors) -> Self {
        let mut error_messages: Vec<String> = validation_errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error.message.as_ref().unwrap_or(&"Invalid value".into())
                    )
                })
            })
            .collect();
        error_messages.sort();

        ServiceError::validation(error_messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Must be a valid email"))]
        email: String,
    }

    #[test]
    fn test_validation_errors_are_flattened() {
        let errors = Probe {
            email: "nope".to_string(),
        }
        .validate()
        .unwrap_err();

        let error = ServiceError::from(errors);
        match error {
            ServiceError::Validation { message } => {
                assert_eq!(message, "email: Must be a valid email")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_only_store_failures_are_retryable() {
        assert!(ServiceError::from(anyhow::anyhow!("pool timed out")).is_retryable());
        assert!(!ServiceError::AuthenticationFailed.is_retryable());
        assert!(!ServiceError::duplicate_email("a@b.c").is_retryable());
        assert!(!ServiceError::invalid_token("expired").is_retryable());
    }
}
