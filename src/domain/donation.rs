use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// A captured donation. Payment processing itself is out of scope; this is
/// the durable record of the pledge.
#[derive(Debug, Clone, Serialize)]
pub struct Donation {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: f64,
    pub purpose: String,
    pub message: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Donation {
    #[must_use]
    pub fn new(
        user_id: &str,
        name: String,
        email: String,
        phone: String,
        amount: f64,
        purpose: String,
        message: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name,
            email,
            phone,
            amount,
            purpose,
            message,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
