use crate::domain::donation::Donation;
use crate::error::Result;
use crate::storage::StorageGateway;
use std::sync::Arc;

/// A donation pledge as submitted; validated by the API layer.
#[derive(Debug, Clone)]
pub struct DonationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: f64,
    pub purpose: String,
    pub message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct DonationService {
    gateway: Arc<dyn StorageGateway>,
}

impl DonationService {
    #[must_use]
    pub fn new(gateway: Arc<dyn StorageGateway>) -> Self {
        Self { gateway }
    }

    /// # Errors
    /// Returns a storage error if the record cannot be written.
    #[tracing::instrument(err(level = "warn"), skip(self, form), fields(user_id = %user_id))]
    pub async fn record(&self, user_id: &str, form: DonationForm) -> Result<Donation> {
        let donation = Donation::new(
            user_id,
            form.name,
            form.email,
            form.phone,
            form.amount,
            form.purpose,
            form.message,
        );
        self.gateway.record_donation(&donation).await?;
        tracing::info!(amount = donation.amount, "Donation recorded");

        Ok(donation)
    }
}
