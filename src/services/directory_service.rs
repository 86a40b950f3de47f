use crate::domain::donation::Donation;
use crate::domain::event::Event;
use crate::domain::user::{ProfileUpdate, User};
use crate::error::{AppError, Result};
use crate::storage::StorageGateway;
use std::sync::Arc;

const SEARCH_MIN_QUERY_LEN: usize = 2;
const SEARCH_RESULT_LIMIT: i64 = 10;

/// A user's profile page: the account plus everything hanging off it.
#[derive(Debug, Clone)]
pub struct ProfileOverview {
    pub user: User,
    pub registered_events: Vec<Event>,
    pub donations: Vec<Donation>,
    pub message_count: u64,
}

/// Network-wide headline numbers for the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct NetworkStats {
    pub total_alumni: u64,
    pub upcoming_events: u64,
    pub recent_donations: u64,
}

/// Profile retrieval and updates, alumni search, and dashboard stats.
#[derive(Clone, Debug)]
pub struct DirectoryService {
    gateway: Arc<dyn StorageGateway>,
}

impl DirectoryService {
    #[must_use]
    pub fn new(gateway: Arc<dyn StorageGateway>) -> Self {
        Self { gateway }
    }

    /// # Errors
    /// Returns `AppError::AuthError` if the authenticated identity no longer
    /// maps to an account.
    #[tracing::instrument(err(level = "warn"), skip(self), fields(user_id = %user_id))]
    pub async fn profile(&self, user_id: &str) -> Result<ProfileOverview> {
        let user = self.gateway.find_user_by_id(user_id).await?.ok_or(AppError::AuthError)?;

        let registered_events = self.gateway.registered_events(user_id).await?;
        let donations = self.gateway.donations_by_user(user_id).await?;
        let message_count = self.gateway.count_messages_for(user_id).await?;

        Ok(ProfileOverview { user, registered_events, donations, message_count })
    }

    /// # Errors
    /// Returns `AppError::AuthError` if the account does not exist.
    #[tracing::instrument(err(level = "warn"), skip(self, changes), fields(user_id = %user_id))]
    pub async fn update_profile(&self, user_id: &str, changes: ProfileUpdate) -> Result<User> {
        if changes.is_empty() {
            return self.gateway.find_user_by_id(user_id).await?.ok_or(AppError::AuthError);
        }

        self.gateway.update_profile(user_id, &changes).await?.ok_or(AppError::AuthError)
    }

    /// Substring search over names and companies, excluding the viewer.
    /// Queries shorter than two characters return nothing.
    ///
    /// # Errors
    /// Returns a storage error if the lookup fails.
    #[tracing::instrument(err(level = "warn"), skip(self, query), fields(viewer_id = %viewer_id))]
    pub async fn search(&self, viewer_id: &str, query: &str) -> Result<Vec<User>> {
        if query.chars().count() < SEARCH_MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        self.gateway.search_users(viewer_id, query, SEARCH_RESULT_LIMIT).await
    }

    /// # Errors
    /// Returns a storage error if any count fails.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn network_stats(&self) -> Result<NetworkStats> {
        Ok(NetworkStats {
            total_alumni: self.gateway.count_users().await?,
            upcoming_events: self.gateway.count_events().await?,
            recent_donations: self.gateway.count_donations().await?,
        })
    }
}
