//! Inbound webhook verification and event dispatch.
//!
//! A [`WebhookHandler`] owns the signing secret and a table of payload
//! decoders keyed by [`WebhookEvent`]. Handling a delivery runs a fixed
//! pipeline: parse headers, verify the signature, parse the JSON body,
//! dispatch to the registered decoder. Each stage fails with its own
//! [`WebhookError`] variant, and nothing past the signature check runs on
//! an unverified body.

mod envelope;
mod event;
mod handler;
mod headers;
mod payload;

pub use envelope::Webhook;
pub use event::WebhookEvent;
pub use handler::{PayloadDecoder, WebhookHandler, payment_webhook_handler};
pub use headers::{IntoWebhookHeaders, WebhookHeaders};
pub use payload::{EventPayload, WebhookPayload};

/// Errors produced while handling a webhook delivery.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The event header does not name a known [`WebhookEvent`].
    #[error("invalid webhook event value: {0:?}")]
    InvalidEventValue(String),

    /// The supplied signature does not match the signing string.
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// The body is not a JSON object.
    #[error("malformed webhook body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// The event is known but no decoder is registered for it.
    #[error("Unsupported webhook event: {0}")]
    UnsupportedEvent(String),

    /// The body parsed but does not fit the registered payload type.
    #[error("invalid {event} payload: {source}")]
    InvalidPayload {
        event: WebhookEvent,
        #[source]
        source: serde_json::Error,
    },
}

impl From<crate::signature::SignatureError> for WebhookError {
    fn from(err: crate::signature::SignatureError) -> Self {
        match err {
            crate::signature::SignatureError::SignatureMismatch => Self::InvalidSignature,
        }
    }
}
