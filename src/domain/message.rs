//! Inbound message payload value objects

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Display portion of a push payload, intended for direct rendering.
///
/// Title and body travel together: a payload is only renderable when both
/// are present and non-empty. The optional icon is an application-relative
/// reference such as `/icons/restock.png`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayContent {
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One background message as delivered by the transport provider.
///
/// Unknown fields are tolerated; the transport owns the payload shape and
/// may extend it. A payload without a renderable display sub-record is a
/// data-only message handled by the foreground app, not by this worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<DisplayContent>,

    /// Payload-level icon override. Some senders place the icon here
    /// instead of inside the display sub-record; both are accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Application-specific metadata (e.g. an item id to open on tap).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, String>,
}

impl MessagePayload {
    /// Create a payload carrying only a title and body
    pub fn with_display(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            notification: Some(DisplayContent {
                title: Some(title.into()),
                body: Some(body.into()),
                icon: None,
            }),
            ..Self::default()
        }
    }

    /// Create a data-only payload (no display sub-record)
    pub fn data_only(data: HashMap<String, String>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// The renderable (title, body) pair, if this payload has one.
    ///
    /// Returns `None` when the display sub-record is absent or either
    /// field is missing or empty.
    pub fn display_fields(&self) -> Option<(&str, &str)> {
        let display = self.notification.as_ref()?;
        let title = display.title.as_deref().filter(|t| !t.is_empty())?;
        let body = display.body.as_deref().filter(|b| !b.is_empty())?;
        Some((title, body))
    }

    /// The sender-specified icon, preferring the display sub-record
    /// over the payload-level field.
    pub fn icon_override(&self) -> Option<&str> {
        self.notification
            .as_ref()
            .and_then(|n| n.icon.as_deref())
            .or(self.icon.as_deref())
    }

    /// Whether this payload carries only metadata
    pub fn is_data_only(&self) -> bool {
        self.display_fields().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fields_present() {
        let payload = MessagePayload::with_display("Stock Alert", "Item #4521 is low");
        assert_eq!(
            payload.display_fields(),
            Some(("Stock Alert", "Item #4521 is low"))
        );
        assert!(!payload.is_data_only());
    }

    #[test]
    fn data_only_payload_has_no_display_fields() {
        let mut data = HashMap::new();
        data.insert("itemId".to_string(), "4521".to_string());
        let payload = MessagePayload::data_only(data);
        assert_eq!(payload.display_fields(), None);
        assert!(payload.is_data_only());
    }

    #[test]
    fn empty_title_is_not_renderable() {
        let payload = MessagePayload::with_display("", "body");
        assert_eq!(payload.display_fields(), None);
    }

    #[test]
    fn missing_body_is_not_renderable() {
        let payload = MessagePayload {
            notification: Some(DisplayContent {
                title: Some("Restock".to_string()),
                body: None,
                icon: None,
            }),
            ..MessagePayload::default()
        };
        assert_eq!(payload.display_fields(), None);
    }

    #[test]
    fn display_icon_takes_precedence_over_payload_icon() {
        let payload = MessagePayload {
            notification: Some(DisplayContent {
                title: Some("Restock".to_string()),
                body: Some("Done".to_string()),
                icon: Some("/display.png".to_string()),
            }),
            icon: Some("/payload.png".to_string()),
            ..MessagePayload::default()
        };
        assert_eq!(payload.icon_override(), Some("/display.png"));
    }

    #[test]
    fn payload_icon_used_when_display_has_none() {
        let payload = MessagePayload {
            notification: Some(DisplayContent {
                title: Some("Restock".to_string()),
                body: Some("Done".to_string()),
                icon: None,
            }),
            icon: Some("/custom.png".to_string()),
            ..MessagePayload::default()
        };
        assert_eq!(payload.icon_override(), Some("/custom.png"));
    }

    #[test]
    fn deserializes_transport_json() {
        let json = r#"{"notification": {"title": "Stock Alert", "body": "Item #4521 is low"}}"#;
        let payload: MessagePayload = serde_json::from_str(json).unwrap();
        assert_eq!(
            payload.display_fields(),
            Some(("Stock Alert", "Item #4521 is low"))
        );
        assert!(payload.data.is_empty());
    }

    #[test]
    fn deserializes_data_only_json() {
        let json = r#"{"data": {"itemId": "4521"}}"#;
        let payload: MessagePayload = serde_json::from_str(json).unwrap();
        assert!(payload.is_data_only());
        assert_eq!(payload.data.get("itemId").map(String::as_str), Some("4521"));
    }

    #[test]
    fn tolerates_unknown_fields() {
        let json = r#"{"notification": {"title": "T", "body": "B"}, "fcmMessageId": "abc123"}"#;
        let payload: MessagePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.display_fields(), Some(("T", "B")));
    }
}
