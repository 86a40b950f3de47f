use crate::domain::message::LiveEvent;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Process-wide map from user identity to at most one live delivery channel.
///
/// Registering a new channel for an identity replaces the old mapping; the
/// orphaned sender is dropped, which closes the prior session's receiver and
/// lets its socket task wind down. Eviction is lazy: a closed channel is
/// only noticed (and removed) on the next send.
///
/// This is a best-effort notification path, not a queue. There is no retry,
/// no buffering for offline users, and no delivery acknowledgment.
#[derive(Clone, Debug, Default)]
pub struct ConnectionRegistry {
    connections: Arc<DashMap<String, mpsc::Sender<LiveEvent>>>,
}

impl ConnectionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `channel` as the live delivery target for `user_id`,
    /// unconditionally overwriting any prior registration.
    pub fn connect(&self, user_id: &str, channel: mpsc::Sender<LiveEvent>) {
        if self.connections.insert(user_id.to_string(), channel).is_some() {
            tracing::debug!(user_id = %user_id, "Replaced existing live channel");
        }
    }

    /// Removes the registration for `user_id` if present; no-op otherwise.
    pub fn disconnect(&self, user_id: &str) {
        self.connections.remove(user_id);
    }

    /// Removes the registration only while `channel` is still the registered
    /// one. A session tearing down after being replaced must not evict its
    /// replacement.
    pub fn disconnect_channel(&self, user_id: &str, channel: &mpsc::Sender<LiveEvent>) {
        self.connections.remove_if(user_id, |_, registered| registered.same_channel(channel));
    }

    /// Pushes `event` to the user's live channel, if any. Returns whether the
    /// event was handed to a live session. A closed channel is evicted and
    /// reported as non-delivery; a full buffer is non-delivery without
    /// eviction. Never fails the caller.
    pub fn send(&self, user_id: &str, event: LiveEvent) -> bool {
        // Clone the sender out before touching the map again; holding the
        // shard guard across remove_if would deadlock.
        let Some(channel) = self.connections.get(user_id).map(|entry| entry.value().clone())
        else {
            return false;
        };

        match channel.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!(user_id = %user_id, "Live channel buffer full, dropping event");
                false
            }
            Err(TrySendError::Closed(_)) => {
                self.disconnect_channel(user_id, &channel);
                tracing::debug!(user_id = %user_id, "Evicted closed live channel");
                false
            }
        }
    }

    #[must_use]
    pub fn is_connected(&self, user_id: &str) -> bool {
        self.connections.contains_key(user_id)
    }
}
