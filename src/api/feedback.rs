use crate::api::AppState;
use crate::api::schemas::Ack;
use crate::api::schemas::feedback::FeedbackRequest;
use crate::error::{AppError, Result};
use axum::{Json, extract::State, response::IntoResponse};

pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(payload): Json<FeedbackRequest>,
) -> Result<impl IntoResponse> {
    payload.validate().map_err(AppError::BadRequest)?;

    state.feedback_service.record(payload.message).await?;

    Ok(Json(Ack::new("Feedback submitted successfully!")))
}
