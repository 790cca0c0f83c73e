//! Rendered notification request value objects

use serde::Serialize;

use crate::domain::message::MessagePayload;

/// Icon shown when the payload does not name one
pub const DEFAULT_ICON: &str = "/icons/stock-beacon.png";

/// Options passed alongside the title to the platform notification API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationOptions {
    pub body: String,
    pub icon: String,
}

/// The fields handed to the platform's show-notification call.
///
/// Constructed synchronously from one inbound payload, handed to the
/// sink, and discarded. Title and options are always both populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    pub title: String,
    pub options: NotificationOptions,
}

impl NotificationRequest {
    /// Map an inbound payload to a notification request.
    ///
    /// Returns `None` for data-only payloads; those are the foreground
    /// app's job and must not produce a notification here.
    pub fn from_payload(payload: &MessagePayload) -> Option<Self> {
        let (title, body) = payload.display_fields()?;
        let icon = payload.icon_override().unwrap_or(DEFAULT_ICON);

        Some(Self {
            title: title.to_owned(),
            options: NotificationOptions {
                body: body.to_owned(),
                icon: icon.to_owned(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_display_payload_with_default_icon() {
        let payload = MessagePayload::with_display("Stock Alert", "Item #4521 is low");
        let request = NotificationRequest::from_payload(&payload).unwrap();
        assert_eq!(request.title, "Stock Alert");
        assert_eq!(request.options.body, "Item #4521 is low");
        assert_eq!(request.options.icon, DEFAULT_ICON);
    }

    #[test]
    fn passes_custom_icon_through_unchanged() {
        let mut payload = MessagePayload::with_display("Restock", "Done");
        payload.icon = Some("/custom.png".to_string());
        let request = NotificationRequest::from_payload(&payload).unwrap();
        assert_eq!(request.options.icon, "/custom.png");
    }

    #[test]
    fn data_only_payload_maps_to_none() {
        let payload = MessagePayload::data_only(Default::default());
        assert!(NotificationRequest::from_payload(&payload).is_none());
    }
}
