use super::{Backend, StorageGateway, decode_timestamp, encode_timestamp};
use crate::domain::donation::Donation;
use crate::domain::event::{Event, EventRegistration};
use crate::domain::feedback::Feedback;
use crate::domain::message::Message;
use crate::domain::user::{ProfileUpdate, User};
use crate::error::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct UserDoc {
    #[serde(rename = "_id")]
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

impl UserDoc {
    fn from_user(user: &User) -> Result<Self> {
        Ok(Self {
            id: user.id.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            passout_year: user.passout_year,
            current_location: user.current_location.clone(),
            current_company: user.current_company.clone(),
            domain: user.domain.clone(),
            phone: user.phone.clone(),
            profile_picture: user.profile_picture.clone(),
            created_at: encode_timestamp(user.created_at)?,
        })
    }

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

#[derive(Serialize, Deserialize)]
struct MessageDoc {
    #[serde(rename = "_id")]
    id: String,
    sender_id: String,
    receiver_id: String,
    message: String,
    timestamp: String,
    read: bool,
}

impl MessageDoc {
    fn from_message(message: &Message) -> Result<Self> {
        Ok(Self {
            id: message.id.clone(),
            sender_id: message.sender_id.clone(),
            receiver_id: message.receiver_id.clone(),
            message: message.message.clone(),
            timestamp: encode_timestamp(message.timestamp)?,
            read: message.read,
        })
    }

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

#[derive(Serialize, Deserialize)]
struct EventDoc {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    date: String,
    location: String,
    image: String,
    description: String,
    has_registration: bool,
}

impl From<EventDoc> for Event {
    fn from(doc: EventDoc) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            date: doc.date,
            location: doc.location,
            image: doc.image,
            description: doc.description,
            has_registration: doc.has_registration,
        }
    }
}

impl From<&Event> for EventDoc {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            date: event.date.clone(),
            location: event.location.clone(),
            image: event.image.clone(),
            description: event.description.clone(),
            has_registration: event.has_registration,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RegistrationDoc {
    #[serde(rename = "_id")]
    id: String,
    user_id: String,
    event_id: String,
    name: String,
    email: String,
    phone: String,
    attend_dinner: bool,
    registered_at: String,
}

#[derive(Serialize, Deserialize)]
struct DonationDoc {
    #[serde(rename = "_id")]
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

impl DonationDoc {
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

#[derive(Serialize, Deserialize)]
struct FeedbackDoc {
    #[serde(rename = "_id")]
    id: String,
    message: String,
    created_at: String,
}

/// Document-store implementation of the persistence gateway.
#[derive(Clone, Debug)]
pub struct MongoGateway {
    db: Database,
    conversation_fetch_cap: i64,
}

impl MongoGateway {
    /// Connects to MongoDB and verifies reachability with a ping.
    ///
    /// # Errors
    /// Returns `AppError::Document` if the server is unreachable.
    pub async fn connect(uri: &str, database: &str, conversation_fetch_cap: i64) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await?;
        Ok(Self { db, conversation_fetch_cap })
    }

    fn users(&self) -> Collection<UserDoc> {
        self.db.collection("users")
    }

    fn events(&self) -> Collection<EventDoc> {
        self.db.collection("events")
    }

    fn registrations(&self) -> Collection<RegistrationDoc> {
        self.db.collection("event_registrations")
    }

    fn messages(&self) -> Collection<MessageDoc> {
        self.db.collection("messages")
    }

    fn donations(&self) -> Collection<DonationDoc> {
        self.db.collection("donations")
    }

    fn feedback(&self) -> Collection<FeedbackDoc> {
        self.db.collection("feedback")
    }
}

#[async_trait]
impl StorageGateway for MongoGateway {
    fn backend(&self) -> Backend {
        Backend::Mongodb
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        self.users().insert_one(UserDoc::from_user(user)?).await?;
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let doc = self.users().find_one(doc! { "email": email }).await?;
        doc.map(UserDoc::into_user).transpose()
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>> {
        let doc = self.users().find_one(doc! { "_id": id }).await?;
        doc.map(UserDoc::into_user).transpose()
    }

    async fn update_profile(&self, id: &str, changes: &ProfileUpdate) -> Result<Option<User>> {
        let mut set = Document::new();
        if let Some(v) = &changes.full_name {
            set.insert("full_name", v);
        }
        if let Some(v) = &changes.current_location {
            set.insert("current_location", v);
        }
        if let Some(v) = &changes.current_company {
            set.insert("current_company", v);
        }
        if let Some(v) = &changes.domain {
            set.insert("domain", v);
        }
        if let Some(v) = &changes.phone {
            set.insert("phone", v);
        }
        if let Some(v) = &changes.profile_picture {
            set.insert("profile_picture", v);
        }

        if !set.is_empty() {
            self.users().update_one(doc! { "_id": id }, doc! { "$set": set }).await?;
        }

        self.find_user_by_id(id).await
    }

    async fn search_users(&self, viewer_id: &str, query: &str, limit: i64) -> Result<Vec<User>> {
        let pattern = regex::escape(query);
        let filter = doc! {
            "_id": { "$ne": viewer_id },
            "$or": [
                { "full_name": { "$regex": &pattern, "$options": "i" } },
                { "current_company": { "$regex": &pattern, "$options": "i" } },
            ],
        };

        let docs: Vec<UserDoc> =
            self.users().find(filter).limit(limit).await?.try_collect().await?;

        docs.into_iter().map(UserDoc::into_user).collect()
    }

    async fn count_users(&self) -> Result<u64> {
        Ok(self.users().count_documents(doc! {}).await?)
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let docs: Vec<EventDoc> = self.events().find(doc! {}).await?.try_collect().await?;
        Ok(docs.into_iter().map(Event::from).collect())
    }

    async fn find_event(&self, id: &str) -> Result<Option<Event>> {
        let doc = self.events().find_one(doc! { "_id": id }).await?;
        Ok(doc.map(Event::from))
    }

    async fn insert_event(&self, event: &Event) -> Result<()> {
        self.events().insert_one(EventDoc::from(event)).await?;
        Ok(())
    }

    async fn count_events(&self) -> Result<u64> {
        Ok(self.events().count_documents(doc! {}).await?)
    }

    async fn create_event_registration(&self, registration: &EventRegistration) -> Result<()> {
        let doc = RegistrationDoc {
            id: registration.id.clone(),
            user_id: registration.user_id.clone(),
            event_id: registration.event_id.clone(),
            name: registration.name.clone(),
            email: registration.email.clone(),
            phone: registration.phone.clone(),
            attend_dinner: registration.attend_dinner,
            registered_at: encode_timestamp(registration.registered_at)?,
        };
        self.registrations().insert_one(doc).await?;
        Ok(())
    }

    async fn is_registered(&self, user_id: &str, event_id: &str) -> Result<bool> {
        let existing = self
            .registrations()
            .find_one(doc! { "user_id": user_id, "event_id": event_id })
            .await?;
        Ok(existing.is_some())
    }

    async fn registered_events(&self, user_id: &str) -> Result<Vec<Event>> {
        let registrations: Vec<RegistrationDoc> =
            self.registrations().find(doc! { "user_id": user_id }).await?.try_collect().await?;

        let event_ids: Vec<String> =
            registrations.into_iter().map(|r| r.event_id).collect();
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let docs: Vec<EventDoc> = self
            .events()
            .find(doc! { "_id": { "$in": event_ids } })
            .await?
            .try_collect()
            .await?;

        Ok(docs.into_iter().map(Event::from).collect())
    }

    async fn append_message(&self, message: &Message) -> Result<()> {
        self.messages().insert_one(MessageDoc::from_message(message)?).await?;
        Ok(())
    }

    async fn fetch_conversation(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>> {
        // Stored timestamps are fixed-width (nine subsecond digits), so
        // lexicographic sort on the text matches chronological order.
        let filter = doc! {
            "$or": [
                { "sender_id": user_a, "receiver_id": user_b },
                { "sender_id": user_b, "receiver_id": user_a },
            ],
        };

        let docs: Vec<MessageDoc> = self
            .messages()
            .find(filter)
            .sort(doc! { "timestamp": 1 })
            .limit(self.conversation_fetch_cap)
            .await?
            .try_collect()
            .await?;

        docs.into_iter().map(MessageDoc::into_message).collect()
    }

    async fn mark_read(&self, receiver_id: &str, sender_id: &str) -> Result<u64> {
        let result = self
            .messages()
            .update_many(
                doc! { "receiver_id": receiver_id, "sender_id": sender_id, "read": false },
                doc! { "$set": { "read": true } },
            )
            .await?;

        Ok(result.modified_count)
    }

    async fn count_messages_for(&self, user_id: &str) -> Result<u64> {
        let filter = doc! {
            "$or": [ { "sender_id": user_id }, { "receiver_id": user_id } ],
        };
        Ok(self.messages().count_documents(filter).await?)
    }

    async fn record_donation(&self, donation: &Donation) -> Result<()> {
        let doc = DonationDoc {
            id: donation.id.clone(),
            user_id: donation.user_id.clone(),
            name: donation.name.clone(),
            email: donation.email.clone(),
            phone: donation.phone.clone(),
            amount: donation.amount,
            purpose: donation.purpose.clone(),
            message: donation.message.clone(),
            created_at: encode_timestamp(donation.created_at)?,
        };
        self.donations().insert_one(doc).await?;
        Ok(())
    }

    async fn donations_by_user(&self, user_id: &str) -> Result<Vec<Donation>> {
        let docs: Vec<DonationDoc> =
            self.donations().find(doc! { "user_id": user_id }).await?.try_collect().await?;

        docs.into_iter().map(DonationDoc::into_donation).collect()
    }

    async fn count_donations(&self) -> Result<u64> {
        Ok(self.donations().count_documents(doc! {}).await?)
    }

    async fn record_feedback(&self, feedback: &Feedback) -> Result<()> {
        let doc = FeedbackDoc {
            id: feedback.id.clone(),
            message: feedback.message.clone(),
            created_at: encode_timestamp(feedback.created_at)?,
        };
        self.feedback().insert_one(doc).await?;
        Ok(())
    }
}
