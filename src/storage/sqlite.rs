use super::{Backend, StorageGateway, decode_timestamp, encode_timestamp};
use crate::domain::donation::Donation;
use crate::domain::event::{Event, EventRegistration};
use crate::domain::feedback::Feedback;
use crate::domain::message::Message;
use crate::domain::user::{ProfileUpdate, User};
use crate::error::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, Pool, Sqlite};
use std::str::FromStr;

pub type DbPool = Pool<Sqlite>;

/// Opens the SQLite database and runs pending migrations.
///
/// The pool is capped at one connection: SQLite serializes writes anyway,
/// and a single shared connection keeps `sqlite::memory:` databases alive
/// for the life of the pool.
///
/// # Errors
/// Returns `AppError::Database` if the file cannot be opened and
/// `AppError::Migration` if migrations fail.
pub async fn connect(database_url: &str) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    Ok(pool)
}

#[derive(FromRow)]
struct UserRecord {
    id: String,
    full_name: String,
    email: String,
    password_hash: String,
    passout_year: i64,
    current_location: String,
    current_company: String,
    domain: String,
    phone: String,
    profile_picture: String,
    created_at: String,
}

impl UserRecord {
    fn into_user(self) -> Result<User> {
        Ok(User {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            password_hash: self.password_hash,
            passout_year: self.passout_year,
            current_location: self.current_location,
            current_company: self.current_company,
            domain: self.domain,
            phone: self.phone,
            profile_picture: self.profile_picture,
            created_at: decode_timestamp(&self.created_at)?,
        })
    }
}

#[derive(FromRow)]
struct MessageRecord {
    id: String,
    sender_id: String,
    receiver_id: String,
    message: String,
    timestamp: String,
    read: bool,
}

impl MessageRecord {
    fn into_message(self) -> Result<Message> {
        Ok(Message {
            id: self.id,
            sender_id: self.sender_id,
            receiver_id: self.receiver_id,
            message: self.message,
            timestamp: decode_timestamp(&self.timestamp)?,
            read: self.read,
        })
    }
}

#[derive(FromRow)]
struct EventRecord {
    id: String,
    title: String,
    date: String,
    location: String,
    image: String,
    description: String,
    has_registration: bool,
}

impl From<EventRecord> for Event {
    fn from(record: EventRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            date: record.date,
            location: record.location,
            image: record.image,
            description: record.description,
            has_registration: record.has_registration,
        }
    }
}

#[derive(FromRow)]
struct DonationRecord {
    id: String,
    user_id: String,
    name: String,
    email: String,
    phone: String,
    amount: f64,
    purpose: String,
    message: Option<String>,
    created_at: String,
}

impl DonationRecord {
    fn into_donation(self) -> Result<Donation> {
        Ok(Donation {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            amount: self.amount,
            purpose: self.purpose,
            message: self.message,
            created_at: decode_timestamp(&self.created_at)?,
        })
    }
}

/// Relational implementation of the persistence gateway.
#[derive(Clone, Debug)]
pub struct SqliteGateway {
    pool: DbPool,
    conversation_fetch_cap: i64,
}

impl SqliteGateway {
    #[must_use]
    pub const fn new(pool: DbPool, conversation_fetch_cap: i64) -> Self {
        Self { pool, conversation_fetch_cap }
    }
}

#[async_trait]
impl StorageGateway for SqliteGateway {
    fn backend(&self) -> Backend {
        Backend::Sqlite
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, full_name, email, password_hash, passout_year,
                               current_location, current_company, domain, phone,
                               profile_picture, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.passout_year)
        .bind(&user.current_location)
        .bind(&user.current_company)
        .bind(&user.domain)
        .bind(&user.phone)
        .bind(&user.profile_picture)
        .bind(encode_timestamp(user.created_at)?)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        record.map(UserRecord::into_user).transpose()
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        record.map(UserRecord::into_user).transpose()
    }

    async fn update_profile(&self, id: &str, changes: &ProfileUpdate) -> Result<Option<User>> {
        sqlx::query(
            r#"
            UPDATE users SET
                full_name = COALESCE(?, full_name),
                current_location = COALESCE(?, current_location),
                current_company = COALESCE(?, current_company),
                domain = COALESCE(?, domain),
                phone = COALESCE(?, phone),
                profile_picture = COALESCE(?, profile_picture)
            WHERE id = ?
            "#,
        )
        .bind(changes.full_name.as_deref())
        .bind(changes.current_location.as_deref())
        .bind(changes.current_company.as_deref())
        .bind(changes.domain.as_deref())
        .bind(changes.phone.as_deref())
        .bind(changes.profile_picture.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_user_by_id(id).await
    }

    async fn search_users(&self, viewer_id: &str, query: &str, limit: i64) -> Result<Vec<User>> {
        let pattern = format!("%{query}%");
        let records = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT * FROM users
            WHERE id != ? AND (full_name LIKE ? OR current_company LIKE ?)
            LIMIT ?
            "#,
        )
        .bind(viewer_id)
        .bind(&pattern)
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(UserRecord::into_user).collect()
    }

    async fn count_users(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let records = sqlx::query_as::<_, EventRecord>("SELECT * FROM events")
            .fetch_all(&self.pool)
            .await?;

        Ok(records.into_iter().map(Event::from).collect())
    }

    async fn find_event(&self, id: &str) -> Result<Option<Event>> {
        let record = sqlx::query_as::<_, EventRecord>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record.map(Event::from))
    }

    async fn insert_event(&self, event: &Event) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events (id, title, date, location, image, description, has_registration)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.id)
        .bind(&event.title)
        .bind(&event.date)
        .bind(&event.location)
        .bind(&event.image)
        .bind(&event.description)
        .bind(event.has_registration)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn count_events(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn create_event_registration(&self, registration: &EventRegistration) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO event_registrations
                (id, user_id, event_id, name, email, phone, attend_dinner, registered_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&registration.id)
        .bind(&registration.user_id)
        .bind(&registration.event_id)
        .bind(&registration.name)
        .bind(&registration.email)
        .bind(&registration.phone)
        .bind(registration.attend_dinner)
        .bind(encode_timestamp(registration.registered_at)?)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn is_registered(&self, user_id: &str, event_id: &str) -> Result<bool> {
        let existing: Option<String> = sqlx::query_scalar(
            "SELECT id FROM event_registrations WHERE user_id = ? AND event_id = ?",
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(existing.is_some())
    }

    async fn registered_events(&self, user_id: &str) -> Result<Vec<Event>> {
        let records = sqlx::query_as::<_, EventRecord>(
            r#"
            SELECT e.* FROM events e
            JOIN event_registrations er ON e.id = er.event_id
            WHERE er.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Event::from).collect())
    }

    async fn append_message(&self, message: &Message) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, sender_id, receiver_id, message, timestamp, read)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(&message.sender_id)
        .bind(&message.receiver_id)
        .bind(&message.message)
        .bind(encode_timestamp(message.timestamp)?)
        .bind(message.read)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn fetch_conversation(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>> {
        // rowid as the tie-breaker preserves insertion order for equal
        // timestamps.
        let records = sqlx::query_as::<_, MessageRecord>(
            r#"
            SELECT id, sender_id, receiver_id, message, timestamp, read
            FROM messages
            WHERE (sender_id = ? AND receiver_id = ?) OR (sender_id = ? AND receiver_id = ?)
            ORDER BY timestamp ASC, rowid ASC
            LIMIT ?
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .bind(user_b)
        .bind(user_a)
        .bind(self.conversation_fetch_cap)
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(MessageRecord::into_message).collect()
    }

    async fn mark_read(&self, receiver_id: &str, sender_id: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE messages SET read = 1
            WHERE receiver_id = ? AND sender_id = ? AND read = 0
            "#,
        )
        .bind(receiver_id)
        .bind(sender_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn count_messages_for(&self, user_id: &str) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE sender_id = ? OR receiver_id = ?",
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count.max(0) as u64)
    }

    async fn record_donation(&self, donation: &Donation) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO donations (id, user_id, name, email, phone, amount, purpose, message, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&donation.id)
        .bind(&donation.user_id)
        .bind(&donation.name)
        .bind(&donation.email)
        .bind(&donation.phone)
        .bind(donation.amount)
        .bind(&donation.purpose)
        .bind(donation.message.as_deref())
        .bind(encode_timestamp(donation.created_at)?)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn donations_by_user(&self, user_id: &str) -> Result<Vec<Donation>> {
        let records = sqlx::query_as::<_, DonationRecord>(
            "SELECT * FROM donations WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(DonationRecord::into_donation).collect()
    }

    async fn count_donations(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM donations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn record_feedback(&self, feedback: &Feedback) -> Result<()> {
        sqlx::query("INSERT INTO feedback (id, message, created_at) VALUES (?, ?, ?)")
            .bind(&feedback.id)
            .bind(&feedback.message)
            .bind(encode_timestamp(feedback.created_at)?)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
