//! Application builder: wires routes, shared components and request tracing
//! into one Axum router.

use crate::api;
use crate::api::common::ApiResponse;
use crate::auth;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::PasswordHasher;
use axum::{
    Extension, Router,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

/// Builds the complete router. Every component is handed in already
/// configured; handlers never read configuration themselves.
pub fn build_router(pool: SqlitePool, jwt_utils: JwtUtils, hasher: PasswordHasher) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/users", auth::routes::auth_router())
        .nest("/products", api::product::routes::product_router())
        .nest("/orders", api::order::routes::order_router())
        .fallback(not_found)
        .layer(Extension(pool))
        .layer(Extension(jwt_utils))
        .layer(Extension(hasher))
        .layer(TraceLayer::new_for_http())
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        json!({
            "service": "Shop Backend",
            "version": env!("CARGO_PKG_VERSION")
        }),
        "Welcome to the Shop API",
    ))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": { "message": "Not found" } })),
    )
}
