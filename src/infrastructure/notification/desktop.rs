//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationSink};
use crate::domain::notification::NotificationRequest;

/// Cross-platform notification sink using notify-rust
pub struct DesktopNotificationSink {
    /// Application name for notifications
    app_name: String,
}

impl DesktopNotificationSink {
    /// Create a new desktop notification sink
    pub fn new() -> Self {
        Self {
            app_name: "StockBeacon".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for DesktopNotificationSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for DesktopNotificationSink {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let title = request.title.clone();
        let body = request.options.body.clone();
        let icon = request.options.icon.clone();
        let app_name = self.app_name.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&body)
                .icon(&icon)
                .show()
                .map_err(|e| NotificationError::ShowFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::ShowFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_creates_successfully() {
        let _sink = DesktopNotificationSink::new();
    }

    #[test]
    fn sink_with_custom_app_name() {
        let sink = DesktopNotificationSink::with_app_name("TestApp");
        assert_eq!(sink.app_name, "TestApp");
    }

    #[test]
    fn sink_default_creates() {
        let sink = DesktopNotificationSink::default();
        assert_eq!(sink.app_name, "StockBeacon");
    }
}
