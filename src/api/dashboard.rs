use crate::api::AppState;
use crate::api::schemas::profile::NetworkStatsResponse;
use crate::error::Result;
use axum::{Json, extract::State, response::IntoResponse};

pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.directory_service.network_stats().await?;

    Ok(Json(NetworkStatsResponse {
        total_alumni: stats.total_alumni,
        upcoming_events: stats.upcoming_events,
        recent_donations: stats.recent_donations,
    }))
}
