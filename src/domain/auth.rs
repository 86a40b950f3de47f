use crate::error::{AppError, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

impl Claims {
    #[must_use]
    pub fn new(user_id: &str, exp: usize) -> Self {
        Self { sub: user_id.to_string(), exp }
    }
}

/// Issues an HS256 access token for the given user identity.
///
/// # Errors
/// Returns `AppError::Internal` if encoding fails.
pub fn issue_jwt(user_id: &str, secret: &str, ttl_days: i64) -> Result<String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(std::time::Duration::from_secs(0))
        .as_secs() as usize;
    let ttl_secs = usize::try_from(ttl_days.max(0)).unwrap_or(0) * 86_400;
    let claims = Claims::new(user_id, now + ttl_secs);

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| AppError::Internal)
}

/// Verifies an access token and returns its claims.
///
/// # Errors
/// Returns `AppError::AuthError` for expired, malformed, or forged tokens.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::AuthError)?;

    Ok(token_data.claims)
}
