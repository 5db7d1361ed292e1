//! Shared response types and error conversion for API handlers.
//!
//! Provides structured responses and the single conversion from service-layer
//! errors to HTTP responses.
//!
//! # Response Format
//! Resource endpoints wrap their payload in [`ApiResponse`]. Error responses
//! always contain:
//! - `message`: Human-readable message
//! - `error.error_type`: Machine-readable error category
//!
//! The signup and login endpoints answer with the flat bodies in
//! [`crate::auth::models`] instead.
//!
//! # Error Handling Flow
//! 1. Service layer returns domain-specific `ServiceError`
//! 2. `service_error_to_http` converts to appropriate HTTP response
//! 3. Infrastructure failures are logged here and reported generically

use crate::errors::ServiceError;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message returned for every authentication or token failure.
pub const AUTH_FAILED_MESSAGE: &str = "Auth failed";

/// Error half of every handler's return type.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    /// Pagination metadata (present for paginated responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
    /// Request timestamp
    pub timestamp: String,
}

/// Pagination metadata for list responses
#[derive(Debug, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (1-indexed)
    pub current_page: u32,
    /// Number of items per page
    pub per_page: u32,
    /// Total number of items across all pages
    pub total_items: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Whether there is a next page
    pub has_next: bool,
    /// Whether there is a previous page
    pub has_prev: bool,
    /// Next page number (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
    /// Previous page number (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<u32>,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
    /// Set when the same request may succeed if retried later
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub retryable: bool,
}

/// Follow-up request a client can make for a returned resource.
#[derive(Debug, Serialize)]
pub struct RequestLink {
    #[serde(rename = "type")]
    pub method: &'static str,
    pub url: String,
}

/// A resource serialized together with the request that fetches it.
#[derive(Debug, Serialize)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub item: T,
    pub request: RequestLink,
}

impl<T> Linked<T> {
    pub fn get(item: T, url: String) -> Self {
        Self {
            item,
            request: RequestLink { method: "GET", url },
        }
    }
}

/// Pagination parameters for requests
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct PaginationFilter {
    /// Page number (1-indexed)
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    /// Number of items per page
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

impl PaginationMeta {
    /// Create pagination metadata from page parameters and total count
    pub fn new(current_page: u32, per_page: u32, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            ((total_items - 1) / per_page as u64 + 1) as u32
        };

        let has_next = current_page < total_pages;
        let has_prev = current_page > 1;

        Self {
            current_page,
            per_page,
            total_items,
            total_pages,
            has_next,
            has_prev,
            next_page: has_next.then(|| current_page + 1),
            prev_page: has_prev.then(|| current_page - 1),
        }
    }

    pub fn from_filter(filter: &PaginationFilter, total_items: u64) -> Self {
        Self::new(filter.page(), filter.per_page(), total_items)
    }
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            pagination: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a successful paginated response
    pub fn paginated(data: T, pagination: PaginationMeta, message: impl Into<String>) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::success(data, message)
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response that carries only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            data: None,
            ..Self::success((), message)
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, error_type: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
                retryable: false,
            }),
            pagination: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl PaginationFilter {
    /// Get page number with default
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Get per_page with default
    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(20)
    }

    /// Calculate offset for database queries
    pub fn offset(&self) -> u64 {
        (self.page().saturating_sub(1) as u64) * self.per_page() as u64
    }

    /// Get limit for database queries
    pub fn limit(&self) -> u64 {
        self.per_page() as u64
    }
}

impl Default for PaginationFilter {
    fn default() -> Self {
        Self {
            page: Some(1),
            per_page: Some(20),
        }
    }
}

/// Builds the uniform 401 returned for any authentication failure.
pub fn unauthorized() -> ApiError {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::<()>::error(AUTH_FAILED_MESSAGE, "auth_failed")),
    )
}

/// Converts ServiceError to appropriate HTTP response with standard format
pub fn service_error_to_http(error: ServiceError) -> ApiError {
    let retryable = error.is_retryable();

    let (status, error_type, message) = match error {
        ServiceError::Validation { message } => {
            (StatusCode::BAD_REQUEST, "validation_error", message)
        }
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            "not_found",
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::DuplicateEmail { .. } => {
            (StatusCode::CONFLICT, "duplicate_email", "Email in use".to_string())
        }
        ServiceError::AuthenticationFailed | ServiceError::InvalidToken { .. } => {
            return unauthorized();
        }
        ServiceError::StoreUnavailable { source } => {
            tracing::error!("Store error: {:#}", source);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                "Service temporarily unavailable".to_string(),
            )
        }
        ServiceError::Internal { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            )
        }
    };

    let mut error_response = ApiResponse::<()>::error(message, error_type);
    if let Some(details) = error_response.error.as_mut() {
        details.retryable = retryable;
    }
    (status, Json(error_response))
}
