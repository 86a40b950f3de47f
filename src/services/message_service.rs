use crate::domain::message::{LiveEvent, Message};
use crate::error::Result;
use crate::services::registry::ConnectionRegistry;
use crate::storage::StorageGateway;
use std::sync::Arc;

/// Orchestrates persistence-then-delivery for direct messages.
///
/// Persistence is the durability boundary: a storage failure fails the whole
/// operation, while live delivery is strictly best-effort and its outcome is
/// never surfaced to the sender.
#[derive(Clone, Debug)]
pub struct MessageService {
    gateway: Arc<dyn StorageGateway>,
    registry: ConnectionRegistry,
}

impl MessageService {
    #[must_use]
    pub fn new(gateway: Arc<dyn StorageGateway>, registry: ConnectionRegistry) -> Self {
        Self { gateway, registry }
    }

    /// Persists a message and then attempts live delivery to the receiver.
    ///
    /// The persisted message is the authoritative result. No receiver
    /// existence check and no self-message guard: unknown or own receiver
    /// identities are accepted.
    ///
    /// # Errors
    /// Returns a storage error if the append fails; nothing is delivered in
    /// that case.
    #[tracing::instrument(
        err(level = "warn"),
        skip(self, body),
        fields(sender_id = %sender_id, receiver_id = %receiver_id)
    )]
    pub async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        body: String,
    ) -> Result<Message> {
        let message = Message::new(sender_id, receiver_id, body);
        self.gateway.append_message(&message).await?;

        let delivered =
            self.registry.send(receiver_id, LiveEvent::NewMessage { message: message.clone() });
        tracing::debug!(delivered, "Message persisted");

        Ok(message)
    }

    /// Fetches the conversation between the viewer and the other party, then
    /// marks everything addressed to the viewer from that party as read.
    ///
    /// The returned snapshot is the one fetched before the read transition,
    /// so messages the viewer is seeing for the first time still carry
    /// `read = false` in this response.
    ///
    /// # Errors
    /// Returns a storage error if either storage call fails.
    #[tracing::instrument(
        err(level = "warn"),
        skip(self),
        fields(viewer_id = %viewer_id, other_id = %other_id)
    )]
    pub async fn get_conversation(&self, viewer_id: &str, other_id: &str) -> Result<Vec<Message>> {
        let conversation = self.gateway.fetch_conversation(viewer_id, other_id).await?;

        let updated = self.gateway.mark_read(viewer_id, other_id).await?;
        if updated > 0 {
            tracing::debug!(updated, "Marked inbound messages as read");
        }

        Ok(conversation)
    }
}
