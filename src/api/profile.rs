use crate::api::AppState;
use crate::api::middleware::AuthUser;
use crate::api::schemas::profile::{ProfileResponse, ProfileUpdateRequest, ProfileUpdateResponse};
use crate::domain::user::PublicUser;
use crate::error::{AppError, Result};
use axum::{Json, extract::State, response::IntoResponse};

pub async fn get_profile(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let overview = state.directory_service.profile(&auth_user.user_id).await?;

    Ok(Json(ProfileResponse {
        user: PublicUser::from(overview.user),
        registered_events: overview.registered_events,
        donations: overview.donations,
        message_count: overview.message_count,
    }))
}

pub async fn update_profile(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ProfileUpdateRequest>,
) -> Result<impl IntoResponse> {
    payload.validate().map_err(AppError::BadRequest)?;

    let user = state.directory_service.update_profile(&auth_user.user_id, payload.into()).await?;

    Ok(Json(ProfileUpdateResponse {
        message: "Profile updated successfully".to_string(),
        user: PublicUser::from(user),
    }))
}
