//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod message_source;
pub mod notification_sink;

// Re-export common types
pub use config::ConfigStore;
pub use message_source::MessageSource;
pub use notification_sink::{NotificationError, NotificationSink};
