use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

pub const DEFAULT_PROFILE_PICTURE: &str = "https://images.unsplash.com/photo-1623461487986-9400110de28e";

/// A registered alumni account. The password hash never leaves the storage
/// and service layers; API responses use [`PublicUser`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub passout_year: i64,
    pub current_location: String,
    pub current_company: String,
    pub domain: String,
    pub phone: String,
    pub profile_picture: String,
    pub created_at: OffsetDateTime,
}

/// Fields a profile owner may change after registration.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub current_location: Option<String>,
    pub current_company: Option<String>,
    pub domain: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
}

impl ProfileUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.current_location.is_none()
            && self.current_company.is_none()
            && self.domain.is_none()
            && self.phone.is_none()
            && self.profile_picture.is_none()
    }
}

/// The user record as exposed over the API: everything except the hash.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub passout_year: i64,
    pub current_location: String,
    pub current_company: String,
    pub domain: String,
    pub phone: String,
    pub profile_picture: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            passout_year: user.passout_year,
            current_location: user.current_location,
            current_company: user.current_company,
            domain: user.domain,
            phone: user.phone,
            profile_picture: user.profile_picture,
            created_at: user.created_at,
        }
    }
}

/// Everything needed to create an account; already validated by the API layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub passout_year: i64,
    pub current_location: String,
    pub current_company: String,
    pub domain: String,
    pub phone: String,
    pub profile_picture: Option<String>,
}

impl User {
    #[must_use]
    pub fn from_registration(new_user: &NewUser, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            full_name: new_user.full_name.clone(),
            email: new_user.email.clone(),
            password_hash,
            passout_year: new_user.passout_year,
            current_location: new_user.current_location.clone(),
            current_company: new_user.current_company.clone(),
            domain: new_user.domain.clone(),
            phone: new_user.phone.clone(),
            profile_picture: new_user
                .profile_picture
                .clone()
                .unwrap_or_else(|| DEFAULT_PROFILE_PICTURE.to_string()),
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
