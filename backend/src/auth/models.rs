//! Request and response bodies for the signup and login endpoints.
//!
//! These bodies are flat (`{message}` / `{message, token}`) rather than wrapped
//! in `ApiResponse`, since clients read `token` from the top level.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request payload
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        email(message = "Must be a valid email"),
        length(max = 255, message = "Email too long")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Plain `{message}` body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response carrying the bearer token
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}
