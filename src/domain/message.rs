use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// One directed communication between two alumni.
///
/// Everything except the `read` flag is immutable after creation; `read`
/// transitions false to true exactly once, when the receiver views the
/// conversation.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub read: bool,
}

impl Message {
    /// Builds a fresh unread message stamped with the current server time.
    #[must_use]
    pub fn new(sender_id: &str, receiver_id: &str, body: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            message: body,
            timestamp: OffsetDateTime::now_utc(),
            read: false,
        }
    }
}

/// Envelope pushed over a live websocket channel.
///
/// Serialized as `{"type": "new_message", "message": {...}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    NewMessage { message: Message },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_is_unread() {
        let msg = Message::new("u1", "u2", "hi".to_string());
        assert!(!msg.read);
        assert_eq!(msg.sender_id, "u1");
        assert_eq!(msg.receiver_id, "u2");
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn live_event_envelope_shape() {
        let msg = Message::new("u1", "u2", "hi".to_string());
        let value = serde_json::to_value(LiveEvent::NewMessage { message: msg }).unwrap();
        assert_eq!(value["type"], "new_message");
        assert_eq!(value["message"]["message"], "hi");
        assert_eq!(value["message"]["read"], false);
    }
}
