use crate::domain::donation::Donation;
use crate::domain::event::Event;
use crate::domain::user::{ProfileUpdate, PublicUser};
use crate::domain::validate;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct ProfileUpdateRequest {
    pub full_name: Option<String>,
    pub current_location: Option<String>,
    pub current_company: Option<String>,
    pub domain: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
}

impl ProfileUpdateRequest {
    /// # Errors
    /// Returns the first failed field check, suitable for a 400 body.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(phone) = &self.phone {
            validate::phone(phone)?;
        }
        Ok(())
    }
}

impl From<ProfileUpdateRequest> for ProfileUpdate {
    fn from(payload: ProfileUpdateRequest) -> Self {
        Self {
            full_name: payload.full_name,
            current_location: payload.current_location,
            current_company: payload.current_company,
            domain: payload.domain,
            phone: payload.phone,
            profile_picture: payload.profile_picture,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ProfileResponse {
    pub user: PublicUser,
    pub registered_events: Vec<Event>,
    pub donations: Vec<Donation>,
    pub message_count: u64,
}

#[derive(Serialize, Debug)]
pub struct ProfileUpdateResponse {
    pub message: String,
    pub user: PublicUser,
}

#[derive(Serialize, Debug)]
pub struct NetworkStatsResponse {
    pub total_alumni: u64,
    pub upcoming_events: u64,
    pub recent_donations: u64,
}
