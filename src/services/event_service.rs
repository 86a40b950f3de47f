use crate::domain::event::{Event, EventRegistration};
use crate::error::{AppError, Result};
use crate::storage::StorageGateway;
use std::sync::Arc;

/// Details a user submits when registering for an event; validated by the
/// API layer.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub attend_dinner: bool,
}

/// Event catalog listing and per-event registration.
#[derive(Clone, Debug)]
pub struct EventService {
    gateway: Arc<dyn StorageGateway>,
}

impl EventService {
    #[must_use]
    pub fn new(gateway: Arc<dyn StorageGateway>) -> Self {
        Self { gateway }
    }

    /// # Errors
    /// Returns a storage error if the catalog cannot be read.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        self.gateway.list_events().await
    }

    /// Registers a user for an event.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` for an unknown event,
    /// `AppError::BadRequest` when the event takes no registrations or the
    /// user is already registered.
    #[tracing::instrument(
        err(level = "warn"),
        skip(self, form),
        fields(user_id = %user_id, event_id = %event_id)
    )]
    pub async fn register(
        &self,
        user_id: &str,
        event_id: &str,
        form: RegistrationForm,
    ) -> Result<EventRegistration> {
        let event = self.gateway.find_event(event_id).await?.ok_or(AppError::NotFound)?;

        if !event.has_registration {
            return Err(AppError::BadRequest(
                "This event does not have registration".to_string(),
            ));
        }

        if self.gateway.is_registered(user_id, event_id).await? {
            return Err(AppError::BadRequest(
                "Already registered for this event".to_string(),
            ));
        }

        let registration = EventRegistration::new(
            user_id,
            event_id,
            form.name,
            form.email,
            form.phone,
            form.attend_dinner,
        );
        self.gateway.create_event_registration(&registration).await?;
        tracing::info!("Event registration recorded");

        Ok(registration)
    }
}
