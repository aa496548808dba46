//! Client SDK for the Paymentic payment API.
//!
//! The [`webhook`] module verifies and decodes inbound event notifications.
//! The [`client`] module (behind the `client` cargo feature, on by default)
//! wraps the REST endpoints for transactions, refunds, BLIK and payment
//! channels.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
pub mod signature;
pub mod validation;
pub mod webhook;

pub use config::{Environment, PaymenticConfig};
pub use webhook::{
    Webhook, WebhookError, WebhookEvent, WebhookHandler, WebhookHeaders, WebhookPayload,
    payment_webhook_handler,
};

#[cfg(feature = "client")]
pub use client::{PaymenticClient, PaymenticClientBuilder};
