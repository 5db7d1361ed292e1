//! Defines the HTTP routes for the product catalogue.

use super::handlers::{create_product, delete_product, get_product, list_products, update_product};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

pub fn product_router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route(
            "/",
            post(create_product).layer(middleware::from_fn(jwt_auth)),
        )
        .route("/{id}", get(get_product))
        .route(
            "/{id}",
            patch(update_product)
                .delete(delete_product)
                .layer(middleware::from_fn(jwt_auth)),
        )
}
