use time::OffsetDateTime;
use uuid::Uuid;

/// Anonymous feedback submitted through the public form.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub id: String,
    pub message: String,
    pub created_at: OffsetDateTime,
}

impl Feedback {
    #[must_use]
    pub fn new(message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
