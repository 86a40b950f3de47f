use crate::domain::feedback::Feedback;
use crate::error::Result;
use crate::storage::StorageGateway;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct FeedbackService {
    gateway: Arc<dyn StorageGateway>,
}

impl FeedbackService {
    #[must_use]
    pub fn new(gateway: Arc<dyn StorageGateway>) -> Self {
        Self { gateway }
    }

    /// # Errors
    /// Returns a storage error if the record cannot be written.
    #[tracing::instrument(err(level = "warn"), skip(self, message))]
    pub async fn record(&self, message: String) -> Result<Feedback> {
        let feedback = Feedback::new(message);
        self.gateway.record_feedback(&feedback).await?;
        tracing::info!("Feedback recorded");

        Ok(feedback)
    }
}
