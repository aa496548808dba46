//! Configuration types for the Paymentic SDK.
//!
//! These mirror the `paymentic` settings block integrations read from their
//! own config files. Loading and file formats are left to the caller.

mod environment;

pub use environment::Environment;

use serde::{Deserialize, Serialize};

use crate::webhook::{WebhookHandler, payment_webhook_handler};

/// Errors raised by [`PaymenticConfig::validate`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("paymentic.api_key must not be empty")]
    MissingApiKey,
    #[error("paymentic.webhook_secret must be set to verify webhooks")]
    MissingWebhookSecret,
}

/// SDK settings: API credentials, target environment and webhook secret.
#[derive(Clone, Serialize, Deserialize)]
pub struct PaymenticConfig {
    pub api_key: String,
    #[serde(default)]
    pub sandbox: bool,
    #[serde(default)]
    pub webhook_secret: Option<String>,
}

impl PaymenticConfig {
    pub fn environment(&self) -> Environment {
        Environment::from_sandbox_flag(self.sandbox)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }

    /// Build a handler for all payment events from `webhook_secret`.
    pub fn webhook_handler(&self) -> Result<WebhookHandler, ConfigError> {
        match self.webhook_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(payment_webhook_handler(secret)),
            _ => Err(ConfigError::MissingWebhookSecret),
        }
    }
}

impl std::fmt::Debug for PaymenticConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymenticConfig")
            .field("api_key", &"[REDACTED]")
            .field("sandbox", &self.sandbox)
            .field(
                "webhook_secret",
                &self.webhook_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
