//! Business logic layer sitting between the HTTP handlers and repositories.

pub mod order_service;
pub mod product_service;
pub mod user_service;
