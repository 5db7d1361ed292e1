//! Handler functions for order endpoints.
//!
//! All of them sit behind `jwt_auth`, so the caller's claims are always
//! present and are recorded in the logs.

use super::models::{CreateOrderRequest, OrderEntry, OrderList, order_entry};
use crate::api::common::{ApiError, ApiResponse, service_error_to_http};
use crate::services::order_service::OrderService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use sqlx::SqlitePool;

#[axum::debug_handler]
pub async fn list_orders(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ApiResponse<OrderList>>, ApiError> {
    tracing::debug!("Listing orders for user: {}", claims.user_id());

    let orders = OrderService::new(&pool)
        .list_orders()
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::success(
        OrderList {
            count: orders.len(),
            orders: orders.into_iter().map(order_entry).collect(),
        },
        "Orders retrieved successfully",
    )))
}

#[axum::debug_handler]
pub async fn create_order(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrderEntry>>), ApiError> {
    tracing::info!("Creating order for user: {}", claims.user_id());

    let order = OrderService::new(&pool)
        .create_order(payload)
        .await
        .map_err(service_error_to_http)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(order_entry(order), "Order stored")),
    ))
}

#[axum::debug_handler]
pub async fn get_order(
    Extension(pool): Extension<SqlitePool>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<OrderEntry>>, ApiError> {
    let order = OrderService::new(&pool)
        .get_order_required(&id)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::success(
        order_entry(order),
        "Order retrieved successfully",
    )))
}

#[axum::debug_handler]
pub async fn delete_order(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    tracing::info!("Deleting order {} for user: {}", id, claims.user_id());

    OrderService::new(&pool)
        .delete_order(&id)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::<()>::message("Order deleted")))
}
