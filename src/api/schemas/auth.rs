use crate::domain::user::{NewUser, User};
use crate::domain::validate;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct Registration {
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

impl Registration {
    /// # Errors
    /// Returns the first failed field check, suitable for a 400 body.
    pub fn validate(&self) -> Result<(), String> {
        validate::email(&self.email)?;
        validate::phone(&self.phone)?;
        validate::passout_year(self.passout_year)?;
        Ok(())
    }
}

impl From<Registration> for NewUser {
    fn from(payload: Registration) -> Self {
        Self {
            full_name: payload.full_name,
            email: payload.email,
            password: payload.password,
            passout_year: payload.passout_year,
            current_location: payload.current_location,
            current_company: payload.current_company,
            domain: payload.domain,
            phone: payload.phone,
            profile_picture: payload.profile_picture,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Login {
    pub email: String,
    pub password: String,
}

/// Short account summary returned with fresh tokens.
#[derive(Serialize, Debug)]
pub struct AccountSummary {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub passout_year: i64,
}

impl From<&User> for AccountSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            passout_year: user.passout_year,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: AccountSummary,
}
