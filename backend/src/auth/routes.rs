//! Defines the HTTP routes for user signup, login and account removal.
//!
//! Mounted under `/users` by the main router.

use crate::auth::handlers::*;
use crate::auth::middleware::*;
use axum::{
    Router, middleware,
    routing::{delete, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route(
            "/{id}",
            delete(delete_user).layer(middleware::from_fn(jwt_auth)),
        )
}
