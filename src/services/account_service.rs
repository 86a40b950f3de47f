use crate::config::AuthConfig;
use crate::domain::auth::issue_jwt;
use crate::domain::user::{NewUser, User};
use crate::error::{AppError, Result};
use crate::storage::StorageGateway;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use std::sync::Arc;

/// An authenticated account paired with a fresh access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug)]
pub struct AccountService {
    config: AuthConfig,
    gateway: Arc<dyn StorageGateway>,
}

impl AccountService {
    #[must_use]
    pub fn new(config: AuthConfig, gateway: Arc<dyn StorageGateway>) -> Self {
        Self { config, gateway }
    }

    /// Creates an account and issues its first access token.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` if the email is already registered.
    #[tracing::instrument(err(level = "warn"), skip(self, registration), fields(user_id = tracing::field::Empty))]
    pub async fn register(&self, registration: NewUser) -> Result<AuthenticatedUser> {
        if self.gateway.find_user_by_email(&registration.email).await?.is_some() {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let password_hash = self.hash_password(&registration.password).await?;
        let user = User::from_registration(&registration, password_hash);
        tracing::Span::current().record("user_id", tracing::field::display(&user.id));

        self.gateway.create_user(&user).await?;

        let token = issue_jwt(&user.id, &self.config.jwt_secret, self.config.token_ttl_days)?;
        tracing::info!("Account registered");

        Ok(AuthenticatedUser { user, token })
    }

    /// Verifies credentials and issues an access token.
    ///
    /// # Errors
    /// Returns `AppError::AuthError` for unknown emails or bad passwords.
    #[tracing::instrument(skip(self, email, password), fields(user_id = tracing::field::Empty), err(level = "warn"))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        let Some(user) = self.gateway.find_user_by_email(email).await? else {
            tracing::warn!("Login failed: user not found");
            return Err(AppError::AuthError);
        };

        tracing::Span::current().record("user_id", tracing::field::display(&user.id));

        if !self.verify_password(password, &user.password_hash).await? {
            tracing::warn!("Login failed: invalid password");
            return Err(AppError::AuthError);
        }

        let token = issue_jwt(&user.id, &self.config.jwt_secret, self.config.token_ttl_days)?;
        Ok(AuthenticatedUser { user, token })
    }

    #[tracing::instrument(err, skip(self, password))]
    async fn hash_password(&self, password: &str) -> Result<String> {
        let password = password.to_string();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            let argon2 = Argon2::default();
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map_err(|_| AppError::Internal)
                .map(|h| h.to_string())
        })
        .await
        .map_err(|_| AppError::Internal)?
    }

    #[tracing::instrument(err, skip(self, password, password_hash))]
    async fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool> {
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash).map_err(|_| AppError::Internal)?;
            Ok(Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_ok())
        })
        .await
        .map_err(|_| AppError::Internal)?
    }
}
