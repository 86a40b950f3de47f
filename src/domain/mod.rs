pub mod auth;
pub mod donation;
pub mod event;
pub mod feedback;
pub mod message;
pub mod user;
pub mod validate;
