//! Authentication module: identity signup, login, token verification and the
//! middleware that gates protected routes.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
