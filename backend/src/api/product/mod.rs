//! Module for product catalogue API endpoints.
//!
//! Reads are public; creating, patching and deleting products require a
//! valid bearer token.

pub mod handlers;
pub mod models;
pub mod routes;
