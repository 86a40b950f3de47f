use crate::domain::validate;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct FeedbackRequest {
    pub message: String,
}

impl FeedbackRequest {
    /// # Errors
    /// Returns the word-limit violation, suitable for a 400 body.
    pub fn validate(&self) -> Result<(), String> {
        validate::feedback_message(&self.message)
    }
}
