use crate::domain::validate;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct DonationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: f64,
    pub purpose: String,
    pub message: Option<String>,
}

impl DonationRequest {
    /// # Errors
    /// Returns the first failed field check, suitable for a 400 body.
    pub fn validate(&self) -> Result<(), String> {
        validate::email(&self.email)?;
        validate::phone(&self.phone)?;
        validate::donation_amount(self.amount)?;
        Ok(())
    }
}
