//! Database repository for identity records.
//!
//! Uniqueness of `email` is enforced by the `idx_users_email` index, so
//! `create_user` is a single INSERT that either succeeds or fails with a
//! unique violation. There is no separate existence check.

use crate::database::models::{CreateUser, User};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// The newly created User. A duplicate email surfaces as a `sqlx::Error`
    /// inside the returned `anyhow::Error`; see [`super::is_unique_violation`].
    pub async fn create_user(&self, user: CreateUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::now_v7().to_string())
        .bind(user.email)
        .bind(user.password_hash)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by their email (case-insensitive).
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// `true` if a row was removed
    pub async fn delete_user(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of users registered under `email`.
    #[cfg(test)]
    pub async fn count_by_email(&self, email: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
