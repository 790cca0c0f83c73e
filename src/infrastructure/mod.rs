//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the desktop notification system, message
//! transports, and the config file.

pub mod config;
pub mod messaging;
pub mod notification;

// Re-export adapters
pub use config::FileConfigStore;
pub use messaging::{channel_source, ChannelSource, JsonLineSource};
pub use notification::{create_sink, DesktopNotificationSink};
