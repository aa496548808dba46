//! Configuration module for paymentic-webhook-server.
//!
//! Loads the TOML file, applies CLI overrides and turns the `[paymentic]`
//! section into a ready webhook handler.

pub mod file;

use crate::config::file::{FileConfig, ServerConfig};
use paymentic_sdk::{Environment, WebhookHandler};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(#[from] paymentic_sdk::config::ConfigError),
}

/// Loaded configuration result containing all parts.
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub environment: Environment,
    pub webhook_handler: WebhookHandler,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    pub fn new(config_path: impl AsRef<Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
        }
    }

    /// Read the TOML file, apply CLI overrides, validate, and build the
    /// webhook handler.
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        let mut file_config: FileConfig = toml::from_str(&config_content)?;

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }

        file_config.paymentic.validate()?;
        let webhook_handler = file_config.paymentic.webhook_handler()?;

        Ok(LoadedConfig {
            server: file_config.server,
            environment: file_config.paymentic.environment(),
            webhook_handler,
        })
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }
}
