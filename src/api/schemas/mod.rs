use serde::Serialize;

pub mod auth;
pub mod donations;
pub mod events;
pub mod feedback;
pub mod messaging;
pub mod profile;

/// Plain `{"message": "..."}` acknowledgment body.
#[derive(Serialize, Debug)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}
