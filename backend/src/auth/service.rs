//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::database::models::User;
use crate::errors::ServiceResult;
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::PasswordHasher;
use sqlx::SqlitePool;
use validator::Validate;

/// Authentication service for handling signup, login and account removal.
///
/// Token verification itself is `JwtUtils::validate_token`, run by the
/// `jwt_auth` middleware.
pub struct AuthService<'a> {
    jwt_utils: &'a JwtUtils,
    user_service: UserService<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, jwt_utils: &'a JwtUtils, hasher: PasswordHasher) -> Self {
        AuthService {
            jwt_utils,
            user_service: UserService::new(pool, hasher),
        }
    }

    /// Register a new identity
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<User> {
        request.validate()?;

        self.user_service
            .register(&request.email, &request.password)
            .await
    }

    /// Authenticate a user and issue a JWT
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        request.validate()?;

        let user = self
            .user_service
            .authenticate(&request.email, &request.password)
            .await?;

        let token = self.jwt_utils.generate_token(&user.id, &user.email)?;

        Ok(LoginResponse {
            message: "Auth successful".to_string(),
            token,
            expires_in: self.jwt_utils.expires_in(),
        })
    }

    /// Delete an identity
    pub async fn remove_user(&self, id: &str) -> ServiceResult<()> {
        self.user_service.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::errors::ServiceError;

    fn credentials(email: &str, password: &str) -> (SignupRequest, LoginRequest) {
        (
            SignupRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
            LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let pool = test_pool().await;
        let jwt = JwtUtils::new("test-secret", 3600);
        let auth = AuthService::new(&pool, &jwt, PasswordHasher::new(4));

        let (signup, login) = credentials("alice@example.com", "secret123");
        let user = auth.signup(signup).await.unwrap();
        let response = auth.login(login).await.unwrap();

        assert_eq!(response.message, "Auth successful");
        assert_eq!(response.expires_in, 3600);

        let claims = jwt.validate_token(&response.token).unwrap();
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.sub, user.id);
    }

    #[tokio::test]
    async fn test_wrong_password_issues_no_token() {
        let pool = test_pool().await;
        let jwt = JwtUtils::new("test-secret", 3600);
        let auth = AuthService::new(&pool, &jwt, PasswordHasher::new(4));

        let (signup, _) = credentials("alice@example.com", "secret123");
        auth.signup(signup).await.unwrap();

        let (_, login) = credentials("alice@example.com", "wrong");
        let err = auth.login(login).await.unwrap_err();
        assert!(matches!(err, ServiceError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_signup_rejects_invalid_email() {
        let pool = test_pool().await;
        let jwt = JwtUtils::new("test-secret", 3600);
        let auth = AuthService::new(&pool, &jwt, PasswordHasher::new(4));

        let (signup, _) = credentials("not-an-email", "secret123");
        let err = auth.signup(signup).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_removed_user_cannot_log_in() {
        let pool = test_pool().await;
        let jwt = JwtUtils::new("test-secret", 3600);
        let auth = AuthService::new(&pool, &jwt, PasswordHasher::new(4));

        let (signup, login) = credentials("alice@example.com", "secret123");
        let user = auth.signup(signup).await.unwrap();
        auth.remove_user(&user.id).await.unwrap();

        let err = auth.login(login).await.unwrap_err();
        assert!(matches!(err, ServiceError::AuthenticationFailed));
    }
}
