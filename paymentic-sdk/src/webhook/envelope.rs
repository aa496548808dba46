use super::{WebhookEvent, WebhookHeaders, WebhookPayload};

/// A verified, decoded webhook delivery.
///
/// Only [`WebhookHandler::handle`](super::WebhookHandler::handle) creates
/// these, after the signature check has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Webhook {
    headers: WebhookHeaders,
    payload: WebhookPayload,
    raw_body: String,
}

impl Webhook {
    pub(super) fn new(headers: WebhookHeaders, payload: WebhookPayload, raw_body: String) -> Self {
        Self {
            headers,
            payload,
            raw_body,
        }
    }

    pub fn headers(&self) -> &WebhookHeaders {
        &self.headers
    }

    pub fn payload(&self) -> &WebhookPayload {
        &self.payload
    }

    /// The body exactly as it was received and signed.
    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }

    pub fn event(&self) -> WebhookEvent {
        self.headers.event
    }

    pub fn notification_id(&self) -> &str {
        &self.headers.notification_id
    }

    pub fn module(&self) -> &'static str {
        self.headers.event.module()
    }

    pub fn into_parts(self) -> (WebhookHeaders, WebhookPayload, String) {
        (self.headers, self.payload, self.raw_body)
    }
}
