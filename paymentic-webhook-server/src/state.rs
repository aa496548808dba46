//! Application state shared across all request handlers.

use paymentic_sdk::WebhookHandler;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

/// Cloneable state; the webhook handler sits behind `Arc<RwLock<_>>` so a
/// SIGHUP reload can swap it while requests are in flight.
#[derive(Clone)]
pub struct AppState {
    pub webhook_handler: Arc<RwLock<WebhookHandler>>,
}

impl AppState {
    pub fn new(webhook_handler: WebhookHandler) -> Self {
        Self {
            webhook_handler: Arc::new(RwLock::new(webhook_handler)),
        }
    }

    pub async fn webhook_handler(&self) -> RwLockReadGuard<'_, WebhookHandler> {
        self.webhook_handler.read().await
    }

    /// Replace the handler (used during SIGHUP reload).
    pub async fn replace_webhook_handler(&self, webhook_handler: WebhookHandler) {
        *self.webhook_handler.write().await = webhook_handler;
    }
}
