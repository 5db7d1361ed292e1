//! Defines the HTTP routes for orders.

use super::handlers::{create_order, delete_order, get_order, list_orders};
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn order_router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order).delete(delete_order))
        .route_layer(middleware::from_fn(jwt_auth))
}
