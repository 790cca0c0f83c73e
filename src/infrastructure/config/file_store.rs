//! TOML config file adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::MessagingConfig;
use crate::domain::error::ConfigError;

/// Config store reading the messaging constants from a TOML file
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Create a config store with the default XDG path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("stock-beacon");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_toml(content: &str) -> Result<MessagingConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn load(&self) -> Result<MessagingConfig, ConfigError> {
        if !self.exists() {
            // Unlike optional app settings, the messaging constants are
            // required: without them the worker stays inert.
            return Err(ConfigError::NotFound(
                self.path.to_string_lossy().to_string(),
            ));
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
