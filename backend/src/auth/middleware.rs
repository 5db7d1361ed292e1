//! Middleware for protecting authenticated routes.
//!
//! `jwt_auth` validates the `Authorization: Bearer <token>` header and puts the
//! decoded [`Claims`] into the request extensions for the handler. Any failure
//! ends the request with the uniform 401 body.

use crate::api::common::{ApiError, unauthorized};
use crate::utils::jwt::{Claims, JwtUtils};
use axum::{
    extract::{Extension, Request},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Pulls the token out of a `Bearer` authorization header value.
fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// JWT authentication middleware
pub async fn jwt_auth(
    Extension(jwt_utils): Extension<JwtUtils>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| {
            tracing::warn!("Rejected request to {}: missing bearer token", request.uri());
            unauthorized()
        })?;

    let claims: Claims = jwt_utils.validate_token(token).map_err(|e| {
        tracing::warn!("Rejected request to {}: {}", request.uri(), e);
        unauthorized()
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("abc.def.ghi"), None);
    }
}
