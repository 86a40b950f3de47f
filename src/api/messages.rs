use crate::api::AppState;
use crate::api::middleware::AuthUser;
use crate::api::schemas::messaging::MessageCreate;
use crate::error::Result;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

/// Persists a message and returns it. Live delivery to the receiver is
/// attempted afterwards; its outcome never changes this response.
pub async fn send_message(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<MessageCreate>,
) -> Result<impl IntoResponse> {
    let message = state
        .message_service
        .send_message(&auth_user.user_id, &payload.receiver_id, payload.message)
        .await?;

    Ok(Json(message))
}

/// Returns the conversation with the other party, marking inbound unread
/// messages as read as a side effect of viewing.
pub async fn get_conversation(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(other_user_id): Path<String>,
) -> Result<impl IntoResponse> {
    let conversation =
        state.message_service.get_conversation(&auth_user.user_id, &other_user_id).await?;

    Ok(Json(conversation))
}
