//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod message;
pub mod notification;

// Re-export common types
pub use config::MessagingConfig;
pub use error::ConfigError;
pub use message::{DisplayContent, MessagePayload};
pub use notification::{NotificationOptions, NotificationRequest, DEFAULT_ICON};
