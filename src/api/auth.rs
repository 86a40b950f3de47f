use crate::api::AppState;
use crate::api::schemas::auth::{AccountSummary, AuthResponse, Login, Registration};
use crate::error::{AppError, Result};
use axum::{Json, extract::State, response::IntoResponse};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Registration>,
) -> Result<impl IntoResponse> {
    payload.validate().map_err(AppError::BadRequest)?;

    let authenticated = state.account_service.register(payload.into()).await?;

    Ok(Json(AuthResponse {
        message: "Welcome to Global Horizon Alumni Network!".to_string(),
        token: authenticated.token,
        user: AccountSummary::from(&authenticated.user),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Login>,
) -> Result<impl IntoResponse> {
    let authenticated = state.account_service.login(&payload.email, &payload.password).await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token: authenticated.token,
        user: AccountSummary::from(&authenticated.user),
    }))
}
