use crate::domain::validate;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct EventRegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub attend_dinner: bool,
}

impl EventRegistrationRequest {
    /// # Errors
    /// Returns the first failed field check, suitable for a 400 body.
    pub fn validate(&self) -> Result<(), String> {
        validate::email(&self.email)?;
        validate::phone(&self.phone)?;
        Ok(())
    }
}
