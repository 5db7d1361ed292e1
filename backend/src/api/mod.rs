//! Central module for organizing the application's resource endpoints.
//!
//! User signup, login and removal live in `crate::auth`; this module holds the
//! catalogue and ordering APIs plus the shared response helpers.

pub mod common;
pub mod order;
pub mod product;
