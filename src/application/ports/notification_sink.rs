//! Notification sink port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::NotificationRequest;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    ShowFailed(String),

    #[error("Notification permission denied")]
    PermissionDenied,
}

/// Port for the platform's show-notification capability.
///
/// The call is asynchronous; the dispatcher suspends on it and treats
/// its settlement as the completion of the whole event handling.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Ask the platform to render an OS-level notification.
    ///
    /// # Arguments
    /// * `request` - Title and options to display
    ///
    /// # Returns
    /// Ok(()) once the platform has accepted the notification, error if
    /// it refused (e.g. permission revoked).
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed sink types
#[async_trait]
impl NotificationSink for Box<dyn NotificationSink> {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().show(request).await
    }
}
