use crate::api::AppState;
use crate::api::middleware::AuthUser;
use crate::api::schemas::Ack;
use crate::api::schemas::events::EventRegistrationRequest;
use crate::error::{AppError, Result};
use crate::services::event_service::RegistrationForm;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let events = state.event_service.list_events().await?;
    Ok(Json(events))
}

pub async fn register_for_event(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(payload): Json<EventRegistrationRequest>,
) -> Result<impl IntoResponse> {
    payload.validate().map_err(AppError::BadRequest)?;

    let form = RegistrationForm {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        attend_dinner: payload.attend_dinner,
    };
    state.event_service.register(&auth_user.user_id, &event_id, form).await?;

    Ok(Json(Ack::new("Registration Successful!")))
}
