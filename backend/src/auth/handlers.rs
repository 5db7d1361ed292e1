//! Handler functions for authentication-related API endpoints.
//!
//! These functions parse request data and delegate to `auth::service` for
//! signup, login and account removal.

use crate::api::common::{ApiError, service_error_to_http};
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::utils::jwt::{Claims, JwtUtils};
use crate::utils::password::PasswordHasher;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Handle user signup request
#[axum::debug_handler]
pub async fn signup(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Extension(hasher): Extension<PasswordHasher>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, ResponseJson<MessageResponse>), ApiError> {
    let auth_service = AuthService::new(&pool, &jwt_utils, hasher);

    match auth_service.signup(payload).await {
        Ok(_) => Ok((
            StatusCode::CREATED,
            ResponseJson(MessageResponse::new("User created")),
        )),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Extension(hasher): Extension<PasswordHasher>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<LoginResponse>, ApiError> {
    let auth_service = AuthService::new(&pool, &jwt_utils, hasher);

    match auth_service.login(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => {
            tracing::warn!("Login rejected: {}", error);
            Err(service_error_to_http(error))
        }
    }
}

/// Delete a user account. Requires a valid token.
#[axum::debug_handler]
pub async fn delete_user(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Extension(hasher): Extension<PasswordHasher>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    tracing::info!("User {} requested deletion of user {}", claims.user_id(), id);

    let auth_service = AuthService::new(&pool, &jwt_utils, hasher);
    auth_service
        .remove_user(&id)
        .await
        .map_err(service_error_to_http)?;

    Ok(ResponseJson(MessageResponse::new("User deleted")))
}
