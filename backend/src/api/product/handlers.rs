//! Handler functions for the product catalogue endpoints.

use super::models::{
    CreateProductRequest, ProductEntry, ProductList, UpdateOperation, product_entry,
};
use crate::api::common::{
    ApiError, ApiResponse, PaginationFilter, PaginationMeta, service_error_to_http,
};
use crate::services::product_service::ProductService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
};
use sqlx::SqlitePool;

/// Lists products, one page at a time.
#[axum::debug_handler]
pub async fn list_products(
    Extension(pool): Extension<SqlitePool>,
    Query(pagination): Query<PaginationFilter>,
) -> Result<Json<ApiResponse<ProductList>>, ApiError> {
    let service = ProductService::new(&pool);
    let (products, total) = service
        .list_products(&pagination)
        .await
        .map_err(service_error_to_http)?;

    let meta = PaginationMeta::from_filter(&pagination, total);
    let list = ProductList {
        count: products.len(),
        products: products.into_iter().map(product_entry).collect(),
    };

    Ok(Json(ApiResponse::paginated(
        list,
        meta,
        "Products retrieved successfully",
    )))
}

#[axum::debug_handler]
pub async fn create_product(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductEntry>>), ApiError> {
    tracing::info!("Creating product for user: {}", claims.user_id());

    let service = ProductService::new(&pool);
    let product = service
        .create_product(payload)
        .await
        .map_err(service_error_to_http)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            product_entry(product),
            "Created a new product successfully",
        )),
    ))
}

#[axum::debug_handler]
pub async fn get_product(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductEntry>>, ApiError> {
    let service = ProductService::new(&pool);
    let product = service
        .get_product_required(&id)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::success(
        product_entry(product),
        "Product retrieved successfully",
    )))
}

/// Applies a list of `{propName, value}` operations to a product.
#[axum::debug_handler]
pub async fn update_product(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(operations): Json<Vec<UpdateOperation>>,
) -> Result<Json<ApiResponse<ProductEntry>>, ApiError> {
    tracing::info!("Updating product {} for user: {}", id, claims.user_id());

    let service = ProductService::new(&pool);
    let product = service
        .update_product(&id, operations)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::success(
        product_entry(product),
        "Product updated",
    )))
}

#[axum::debug_handler]
pub async fn delete_product(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    tracing::info!("Deleting product {} for user: {}", id, claims.user_id());

    let service = ProductService::new(&pool);
    service
        .delete_product(&id)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(ApiResponse::<()>::message("Product deleted")))
}
