use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::WebhookError;

/// Event types announced in the `X-Paymentic-Event` header.
///
/// Wire values are `<MODULE>.<NAME>` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEvent {
    #[serde(rename = "PAYMENT.TRANSACTION_STATUS_CHANGED")]
    PaymentTransactionStatusChanged,
    #[serde(rename = "PAYMENT.REFUND_STATUS_CHANGED")]
    PaymentRefundStatusChanged,
    #[serde(rename = "PAYMENT.TRANSACTION_BLIK_STATUS_CHANGED")]
    PaymentTransactionBlikStatusChanged,
}

impl WebhookEvent {
    pub const ALL: [WebhookEvent; 3] = [
        WebhookEvent::PaymentTransactionStatusChanged,
        WebhookEvent::PaymentRefundStatusChanged,
        WebhookEvent::PaymentTransactionBlikStatusChanged,
    ];

    /// The wire value of this event.
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookEvent::PaymentTransactionStatusChanged => "PAYMENT.TRANSACTION_STATUS_CHANGED",
            WebhookEvent::PaymentRefundStatusChanged => "PAYMENT.REFUND_STATUS_CHANGED",
            WebhookEvent::PaymentTransactionBlikStatusChanged => {
                "PAYMENT.TRANSACTION_BLIK_STATUS_CHANGED"
            }
        }
    }

    /// The module prefix, i.e. everything before the first dot.
    pub fn module(&self) -> &'static str {
        let value = self.as_str();
        value.split_once('.').map_or(value, |(module, _)| module)
    }

    pub fn is_payment_event(&self) -> bool {
        self.module() == "PAYMENT"
    }
}

impl FromStr for WebhookEvent {
    type Err = WebhookError;

    /// Exact, case-sensitive match against the wire values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| WebhookError::InvalidEventValue(s.to_owned()))
    }
}

impl std::fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
