//! Central module for application-wide configuration settings.
//!
//! Configuration is read once at startup from the environment (and an optional
//! `.env` file) and then handed to the components that need it. Nothing reads
//! the environment after `main` has built the router.

use anyhow::{Context, Result, bail};
use std::env;

/// Lowest and highest cost factors bcrypt accepts.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub bcrypt_cost: u32,
    pub server_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL not set")?;

        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        let acquire_timeout_seconds = lookup("DB_ACQUIRE_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "3".to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECONDS must be a valid number")?;

        let jwt_secret = lookup("JWT_SECRET").context("JWT_SECRET not set")?;
        if jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let jwt_expires_in_seconds = lookup("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|| "3600".to_string())
            .parse::<u64>()
            .context("JWT_EXPIRES_IN_SECONDS must be a valid number")?;

        let bcrypt_cost = lookup("BCRYPT_COST")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()
            .context("BCRYPT_COST must be a valid number")?;
        if !BCRYPT_COST_RANGE.contains(&bcrypt_cost) {
            bail!(
                "BCRYPT_COST must be between {} and {}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end()
            );
        }

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        Ok(Config {
            database_url,
            max_connections,
            acquire_timeout_seconds,
            jwt_secret,
            jwt_expires_in_seconds,
            bcrypt_cost,
            server_port,
        })
    }
}
