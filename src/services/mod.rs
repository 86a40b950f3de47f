pub mod account_service;
pub mod directory_service;
pub mod donation_service;
pub mod event_service;
pub mod feedback_service;
pub mod message_service;
pub mod registry;
