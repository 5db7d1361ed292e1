//! Module for order API endpoints. Every route requires a valid bearer token.

pub mod handlers;
pub mod models;
pub mod routes;
