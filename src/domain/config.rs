//! Messaging configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Project-identifying constants for the messaging transport.
///
/// These are opaque configuration values, not secrets: the deployed
/// worker script that embeds them is publicly fetchable. Validation is
/// limited to non-emptiness; the transport provider owns their meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    /// Analytics stream id; not required for message delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

impl MessagingConfig {
    /// Check that every required field is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("api_key", &self.api_key),
            ("auth_domain", &self.auth_domain),
            ("project_id", &self.project_id),
            ("storage_bucket", &self.storage_bucket),
            ("messaging_sender_id", &self.messaging_sender_id),
            ("app_id", &self.app_id),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_config() -> MessagingConfig {
        MessagingConfig {
            api_key: "AIzaTestKey".to_string(),
            auth_domain: "stock-beacon.example.com".to_string(),
            project_id: "stock-beacon".to_string(),
            storage_bucket: "stock-beacon.appspot.com".to_string(),
            messaging_sender_id: "938513065793".to_string(),
            app_id: "1:938513065793:web:73f5b165".to_string(),
            measurement_id: None,
        }
    }

    #[test]
    fn complete_config_validates() {
        assert!(complete_config().validate().is_ok());
    }

    #[test]
    fn empty_project_id_is_rejected() {
        let mut config = complete_config();
        config.project_id = String::new();

        let err = config.validate().unwrap_err();
        match err {
            ConfigError::ValidationError { key, .. } => assert_eq!(key, "project_id"),
            other => panic!("expected validation error, got: {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_api_key_is_rejected() {
        let mut config = complete_config();
        config.api_key = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn measurement_id_is_optional() {
        let mut config = complete_config();
        config.measurement_id = None;
        assert!(config.validate().is_ok());

        config.measurement_id = Some("G-NZ7FYLRB02".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_from_toml() {
        let toml = r#"
            api_key = "AIzaTestKey"
            auth_domain = "stock-beacon.example.com"
            project_id = "stock-beacon"
            storage_bucket = "stock-beacon.appspot.com"
            messaging_sender_id = "938513065793"
            app_id = "1:938513065793:web:73f5b165"
        "#;
        let config: MessagingConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.project_id, "stock-beacon");
        assert!(config.measurement_id.is_none());
        assert!(config.validate().is_ok());
    }
}
