//! Configuration port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::MessagingConfig;
use crate::domain::error::ConfigError;

/// Port for loading the static messaging configuration
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    async fn load(&self) -> Result<MessagingConfig, ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if the configuration file exists.
    fn exists(&self) -> bool;
}
