use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::WebhookEvent;
use crate::objects::webhook::{
    RefundStatusChangedPayload, TransactionBlikStatusChangedPayload,
    TransactionStatusChangedPayload,
};

/// A typed payload bound to exactly one [`WebhookEvent`].
pub trait EventPayload: DeserializeOwned + Into<WebhookPayload> {
    const EVENT: WebhookEvent;

    /// Decode the payload from the fields of a parsed JSON body.
    fn from_fields(fields: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(fields))
    }
}

/// Decoded webhook payload, one variant per event.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookPayload {
    TransactionStatusChanged(TransactionStatusChangedPayload),
    RefundStatusChanged(RefundStatusChangedPayload),
    TransactionBlikStatusChanged(TransactionBlikStatusChangedPayload),
}

impl WebhookPayload {
    pub fn event(&self) -> WebhookEvent {
        match self {
            WebhookPayload::TransactionStatusChanged(_) => TransactionStatusChangedPayload::EVENT,
            WebhookPayload::RefundStatusChanged(_) => RefundStatusChangedPayload::EVENT,
            WebhookPayload::TransactionBlikStatusChanged(_) => {
                TransactionBlikStatusChangedPayload::EVENT
            }
        }
    }

    pub fn as_transaction_status_changed(&self) -> Option<&TransactionStatusChangedPayload> {
        match self {
            WebhookPayload::TransactionStatusChanged(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn as_refund_status_changed(&self) -> Option<&RefundStatusChangedPayload> {
        match self {
            WebhookPayload::RefundStatusChanged(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn as_transaction_blik_status_changed(
        &self,
    ) -> Option<&TransactionBlikStatusChangedPayload> {
        match self {
            WebhookPayload::TransactionBlikStatusChanged(payload) => Some(payload),
            _ => None,
        }
    }
}

impl From<TransactionStatusChangedPayload> for WebhookPayload {
    fn from(payload: TransactionStatusChangedPayload) -> Self {
        WebhookPayload::TransactionStatusChanged(payload)
    }
}

impl From<RefundStatusChangedPayload> for WebhookPayload {
    fn from(payload: RefundStatusChangedPayload) -> Self {
        WebhookPayload::RefundStatusChanged(payload)
    }
}

impl From<TransactionBlikStatusChangedPayload> for WebhookPayload {
    fn from(payload: TransactionBlikStatusChangedPayload) -> Self {
        WebhookPayload::TransactionBlikStatusChanged(payload)
    }
}
