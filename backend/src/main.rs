//! Main entry point for the shop backend.
//!
//! Loads configuration once, prepares the database, builds the token and
//! password components from that configuration, and serves the Axum router.

mod api;
mod app;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;
mod utils;

use anyhow::{Context, Result};
use config::Config;
use database::Database;
use tracing::info;
use tracing_subscriber::fmt::init;
use utils::jwt::JwtUtils;
use utils::password::PasswordHasher;

#[tokio::main]
async fn main() -> Result<()> {
    init();

    let config = Config::from_env()?;
    let db = Database::new(&config).await?;
    db.run_migrations().await?;

    let jwt_utils = JwtUtils::from_config(&config);
    let hasher = PasswordHasher::from_config(&config);
    let app = app::build_router(db.pool().clone(), jwt_utils, hasher);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    info!("Starting shop server on port {}", config.server_port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
