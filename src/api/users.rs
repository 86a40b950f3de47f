use crate::api::AppState;
use crate::api::middleware::AuthUser;
use crate::domain::user::PublicUser;
use crate::error::Result;
use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SearchParams {
    q: String,
}

pub async fn search(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse> {
    let users = state.directory_service.search(&auth_user.user_id, &params.q).await?;
    let results: Vec<PublicUser> = users.into_iter().map(PublicUser::from).collect();
    Ok(Json(results))
}
