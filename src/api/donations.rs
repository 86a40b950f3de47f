use crate::api::AppState;
use crate::api::middleware::AuthUser;
use crate::api::schemas::Ack;
use crate::api::schemas::donations::DonationRequest;
use crate::error::{AppError, Result};
use crate::services::donation_service::DonationForm;
use axum::{Json, extract::State, response::IntoResponse};

pub async fn create_donation(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<DonationRequest>,
) -> Result<impl IntoResponse> {
    payload.validate().map_err(AppError::BadRequest)?;

    let form = DonationForm {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        amount: payload.amount,
        purpose: payload.purpose,
        message: payload.message,
    };
    state.donation_service.record(&auth_user.user_id, form).await?;

    Ok(Json(Ack::new("Payment Successful! Thank you for your contribution!")))
}
