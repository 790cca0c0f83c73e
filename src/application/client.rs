//! Messaging client initialization

use crate::application::dispatch::BackgroundDispatcher;
use crate::application::ports::NotificationSink;
use crate::domain::config::MessagingConfig;
use crate::domain::error::ConfigError;

/// Handle produced by one-time messaging initialization.
///
/// Created once per worker lifetime. If initialization fails the worker
/// never registers a message listener and stays inert for messaging;
/// there is no internal retry.
pub struct MessagingClient {
    config: MessagingConfig,
}

impl MessagingClient {
    /// Validate the project-identifying constants and produce a client.
    pub fn initialize(config: MessagingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this client is bound to
    pub fn config(&self) -> &MessagingConfig {
        &self.config
    }

    /// Build the background dispatcher bound to a notification sink.
    pub fn dispatcher<N: NotificationSink>(&self, sink: N) -> BackgroundDispatcher<N> {
        BackgroundDispatcher::new(sink)
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
    fn initializes_with_complete_config() {
        let client = MessagingClient::initialize(complete_config()).unwrap();
        assert_eq!(client.config().project_id, "stock-beacon");
    }

    #[test]
    fn refuses_empty_project_id() {
        let mut config = complete_config();
        config.project_id = String::new();
        assert!(MessagingClient::initialize(config).is_err());
    }
}
