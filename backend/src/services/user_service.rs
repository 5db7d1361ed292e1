//! Credential store: registration, lookup and removal of identities.
//!
//! Plaintext passwords enter through `register` and `authenticate` only and
//! are never persisted or logged.

use crate::database::models::{CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::is_unique_violation;
use crate::repositories::user_repository::UserRepository;
use crate::utils::password::PasswordHasher;
use sqlx::SqlitePool;
use tracing::info;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    hasher: PasswordHasher,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    /// * `hasher` - Password hasher carrying the configured bcrypt cost
    pub fn new(pool: &'a SqlitePool, hasher: PasswordHasher) -> Self {
        Self { pool, hasher }
    }

    /// Registers a new identity.
    ///
    /// # Errors
    /// Returns `ServiceError::DuplicateEmail` if the email is already taken.
    /// The check is the INSERT itself, so two concurrent registrations of the
    /// same email can never both succeed.
    pub async fn register(&self, email: &str, password: &str) -> ServiceResult<User> {
        let password_hash = self.hasher.hash(password).await?;

        let repo = UserRepository::new(self.pool);
        let data = CreateUser {
            email: email.to_string(),
            password_hash,
        };

        match repo.create_user(data).await {
            Ok(user) => {
                info!("Registered user {}", user.id);
                Ok(user)
            }
            Err(e) if is_unique_violation(&e) => Err(ServiceError::duplicate_email(email)),
            Err(e) => Err(e.into()),
        }
    }

    /// Looks up an identity by email.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if no identity uses this email
    pub async fn find_by_email(&self, email: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);
        repo.get_user_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", email))
    }

    /// Removes an identity.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if nothing was deleted
    pub async fn remove(&self, id: &str) -> ServiceResult<()> {
        let repo = UserRepository::new(self.pool);
        if !repo.delete_user(id).await? {
            return Err(ServiceError::not_found("User", id));
        }

        info!("Removed user {}", id);
        Ok(())
    }

    /// Checks an email/password pair.
    ///
    /// # Errors
    /// Returns `ServiceError::AuthenticationFailed` for an unknown email and
    /// for a wrong password alike. For an unknown email a throwaway hash is
    /// still computed so both paths cost about the same.
    pub async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<User> {
        let user = match self.find_by_email(email).await {
            Ok(user) => user,
            Err(ServiceError::NotFound { .. }) => {
                // Result ignored: an over-long password must fail the same way.
                let _ = self.hasher.hash(password).await;
                return Err(ServiceError::AuthenticationFailed);
            }
            Err(e) => return Err(e),
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            return Err(ServiceError::AuthenticationFailed);
        }

        Ok(user)
    }
}
