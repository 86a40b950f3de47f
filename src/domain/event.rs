use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// A catalog entry for an alumni event. The catalog is seeded at startup and
/// read-only thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub image: String,
    pub description: String,
    pub has_registration: bool,
}

/// One user's registration for an event. At most one per (user, event).
#[derive(Debug, Clone, Serialize)]
pub struct EventRegistration {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub attend_dinner: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
}

impl EventRegistration {
    #[must_use]
    pub fn new(
        user_id: &str,
        event_id: &str,
        name: String,
        email: String,
        phone: String,
        attend_dinner: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            event_id: event_id.to_string(),
            name,
            email,
            phone,
            attend_dinner,
            registered_at: OffsetDateTime::now_utc(),
        }
    }
}
