use crate::config::StorageConfig;
use crate::domain::donation::Donation;
use crate::domain::event::{Event, EventRegistration};
use crate::domain::feedback::Feedback;
use crate::domain::message::Message;
use crate::domain::user::{ProfileUpdate, User};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub mod mongo;
pub mod seed;
pub mod sqlite;

/// Which persistence backend the server runs against. Both implement
/// [`StorageGateway`] with identical observable behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    Sqlite,
    Mongodb,
}

/// The persistence gateway. Services depend only on this trait, never on a
/// concrete backend, so either store can be swapped without touching
/// delivery logic.
#[async_trait]
pub trait StorageGateway: Send + Sync + std::fmt::Debug {
    fn backend(&self) -> Backend;

    async fn create_user(&self, user: &User) -> Result<()>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>>;
    /// Applies the provided fields and returns the updated record, or `None`
    /// if the user does not exist.
    async fn update_profile(&self, id: &str, changes: &ProfileUpdate) -> Result<Option<User>>;
    /// Case-insensitive substring match on name or company, excluding the
    /// viewer's own record.
    async fn search_users(&self, viewer_id: &str, query: &str, limit: i64) -> Result<Vec<User>>;
    async fn count_users(&self) -> Result<u64>;

    async fn list_events(&self) -> Result<Vec<Event>>;
    async fn find_event(&self, id: &str) -> Result<Option<Event>>;
    async fn insert_event(&self, event: &Event) -> Result<()>;
    async fn count_events(&self) -> Result<u64>;
    async fn create_event_registration(&self, registration: &EventRegistration) -> Result<()>;
    async fn is_registered(&self, user_id: &str, event_id: &str) -> Result<bool>;
    async fn registered_events(&self, user_id: &str) -> Result<Vec<Event>>;

    /// Durably appends one message. No sender/receiver existence validation
    /// happens here.
    async fn append_message(&self, message: &Message) -> Result<()>;
    /// All messages between the unordered pair, ascending by timestamp, ties
    /// broken by insertion order. Capped at the configured fetch limit.
    async fn fetch_conversation(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>>;
    /// Flips every unread message from `sender_id` to `receiver_id` to read.
    /// Returns the number of messages updated.
    async fn mark_read(&self, receiver_id: &str, sender_id: &str) -> Result<u64>;
    async fn count_messages_for(&self, user_id: &str) -> Result<u64>;

    async fn record_donation(&self, donation: &Donation) -> Result<()>;
    async fn donations_by_user(&self, user_id: &str) -> Result<Vec<Donation>>;
    async fn count_donations(&self) -> Result<u64>;

    async fn record_feedback(&self, feedback: &Feedback) -> Result<()>;
}

/// Connects the configured backend and returns it behind the gateway trait.
///
/// # Errors
/// Fails if the underlying store is unreachable or migrations cannot run.
pub async fn init_gateway(
    config: &StorageConfig,
    conversation_fetch_cap: i64,
) -> Result<Arc<dyn StorageGateway>> {
    match config.backend {
        Backend::Sqlite => {
            let pool = sqlite::connect(&config.database_url).await?;
            Ok(Arc::new(sqlite::SqliteGateway::new(pool, conversation_fetch_cap)))
        }
        Backend::Mongodb => {
            let gateway = mongo::MongoGateway::connect(
                &config.database_url,
                &config.mongo_database,
                conversation_fetch_cap,
            )
            .await?;
            Ok(Arc::new(gateway))
        }
    }
}

/// Timestamps are stored as UTC RFC 3339 text in both backends so that both
/// stores observe identical ordering behavior. The subsecond field is always
/// nine digits: a variable-width fraction would make lexicographic order
/// diverge from chronological order (`...00.5Z` sorts after `...00.51Z`),
/// and both backends sort conversations on this text.
static TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]Z"
);

pub(crate) fn encode_timestamp(ts: OffsetDateTime) -> Result<String> {
    ts.to_offset(UtcOffset::UTC).format(TIMESTAMP_FORMAT).map_err(|_| AppError::Internal)
}

pub(crate) fn decode_timestamp(raw: &str) -> Result<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).map_err(|_| AppError::Internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_timestamps_sort_lexicographically() {
        let base = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let whole = encode_timestamp(base).unwrap();
        let half = encode_timestamp(base + time::Duration::milliseconds(500)).unwrap();
        let finer = encode_timestamp(base + time::Duration::milliseconds(510)).unwrap();

        assert!(whole < half, "{whole} must sort before {half}");
        assert!(half < finer, "{half} must sort before {finer}");
    }

    #[test]
    fn timestamp_roundtrip_preserves_the_instant() {
        let ts = OffsetDateTime::from_unix_timestamp_nanos(1_700_000_000_123_456_789).unwrap();
        let decoded = decode_timestamp(&encode_timestamp(ts).unwrap()).unwrap();
        assert_eq!(decoded, ts);
    }
}
