use serde_json::{Map, Value};
use std::collections::HashMap;

use super::{
    EventPayload, IntoWebhookHeaders, Webhook, WebhookError, WebhookEvent, WebhookHeaders,
    WebhookPayload,
};
use crate::objects::webhook::{
    RefundStatusChangedPayload, TransactionBlikStatusChangedPayload,
    TransactionStatusChangedPayload,
};
use crate::signature;

/// Decodes the fields of a verified JSON body into a typed payload.
pub type PayloadDecoder =
    Box<dyn Fn(Map<String, Value>) -> Result<WebhookPayload, serde_json::Error> + Send + Sync>;

/// Verifies inbound webhooks and dispatches them to payload decoders.
///
/// Register every decoder before sharing the handler across threads; the
/// table is read-only once [`handle`](Self::handle) is in use.
pub struct WebhookHandler {
    secret: Box<[u8]>,
    decoders: HashMap<WebhookEvent, PayloadDecoder>,
}

impl WebhookHandler {
    /// Create a handler with no decoders registered.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into().into_boxed_slice(),
            decoders: HashMap::new(),
        }
    }

    /// Register a decoder for `event`, replacing any previous one.
    pub fn register<F>(mut self, event: WebhookEvent, decoder: F) -> Self
    where
        F: Fn(Map<String, Value>) -> Result<WebhookPayload, serde_json::Error>
            + Send
            + Sync
            + 'static,
    {
        self.decoders.insert(event, Box::new(decoder));
        self
    }

    /// Register `T` as the decoder for [`T::EVENT`](EventPayload::EVENT).
    pub fn register_payload<T: EventPayload>(self) -> Self {
        self.register(T::EVENT, |fields| T::from_fields(fields).map(Into::into))
    }

    pub fn supports(&self, event: WebhookEvent) -> bool {
        self.decoders.contains_key(&event)
    }

    /// Verify and decode one webhook delivery.
    ///
    /// `headers` is either a raw header collection or pre-parsed
    /// [`WebhookHeaders`]. `raw_body` must be the exact request body.
    ///
    /// The steps run in a fixed order and stop at the first failure:
    /// 1. header parsing ([`WebhookError::InvalidEventValue`])
    /// 2. signature check ([`WebhookError::InvalidSignature`])
    /// 3. JSON parsing ([`WebhookError::MalformedBody`])
    /// 4. decoder lookup ([`WebhookError::UnsupportedEvent`])
    /// 5. payload decoding ([`WebhookError::InvalidPayload`])
    pub fn handle(
        &self,
        headers: impl IntoWebhookHeaders,
        raw_body: impl Into<String>,
    ) -> Result<Webhook, WebhookError> {
        let headers = headers.into_webhook_headers()?;
        let raw_body = raw_body.into();

        self.verify_signature(&headers, &raw_body)?;

        let fields: Map<String, Value> =
            serde_json::from_str(&raw_body).map_err(WebhookError::MalformedBody)?;

        let event = headers.event;
        let decoder = self
            .decoders
            .get(&event)
            .ok_or_else(|| WebhookError::UnsupportedEvent(event.as_str().to_owned()))?;
        let payload =
            decoder(fields).map_err(|source| WebhookError::InvalidPayload { event, source })?;

        Ok(Webhook::new(headers, payload, raw_body))
    }

    fn verify_signature(&self, headers: &WebhookHeaders, raw_body: &str) -> Result<(), WebhookError> {
        let data = signature::signing_string(
            headers.event,
            headers.version(),
            raw_body,
            &headers.notification_id,
            &headers.time,
        );
        signature::verify(&data, &headers.signature, &self.secret)?;
        Ok(())
    }
}

impl std::fmt::Debug for WebhookHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut events: Vec<&str> = self.decoders.keys().map(WebhookEvent::as_str).collect();
        events.sort_unstable();
        f.debug_struct("WebhookHandler")
            .field("secret", &"[REDACTED]")
            .field("decoders", &events)
            .finish()
    }
}

/// A handler with decoders for every payment event.
pub fn payment_webhook_handler(secret: impl Into<Vec<u8>>) -> WebhookHandler {
    WebhookHandler::new(secret)
        .register_payload::<TransactionStatusChangedPayload>()
        .register_payload::<RefundStatusChangedPayload>()
        .register_payload::<TransactionBlikStatusChangedPayload>()
}
