//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust.

mod desktop;

pub use desktop::DesktopNotificationSink;

use crate::application::ports::NotificationSink;

/// Create the default notification sink for the current platform
pub fn create_sink() -> Box<dyn NotificationSink> {
    Box::new(DesktopNotificationSink::new())
}
