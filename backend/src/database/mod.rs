//! Module for database connection setup and common utilities.
//!
//! This module is responsible for initializing the database connection pool
//! and applying the embedded schema migrations.

use crate::config::Config;
use anyhow::{Context, Result};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::time::Duration;
use tracing::info;

pub mod models;

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Initializes the database connection pool.
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(&config.database_url)
            .await
            .with_context(|| format!("Failed to connect to {}", config.database_url))?;

        Ok(Database { pool })
    }

    /// Applies all pending migrations from `migrations/`.
    pub async fn run_migrations(&self) -> Result<()> {
        run_migrations(&self.pool).await
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Fresh in-memory database with the schema applied.
///
/// A single connection is used because every `sqlite::memory:` connection
/// opens its own private database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    run_migrations(&pool).await.expect("migrations");
    pool
}

/// File-backed database with several connections, for tests that need
/// writers to actually contend.
#[cfg(test)]
pub async fn file_test_pool(path: &std::path::Path, connections: u32) -> SqlitePool {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(10));
    let pool = SqlitePoolOptions::new()
        .max_connections(connections)
        .connect_with(options)
        .await
        .expect("file-backed sqlite");
    run_migrations(&pool).await.expect("migrations");
    pool
}
