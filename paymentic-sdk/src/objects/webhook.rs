//! Webhook payload types for payment events.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::{RefundStatus, TransactionStatus};
use crate::webhook::{EventPayload, WebhookEvent};

/// Body of `PAYMENT.TRANSACTION_STATUS_CHANGED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusChangedPayload {
    pub transaction_id: String,
    pub point_id: String,
    pub status: TransactionStatus,
    pub amount: Decimal,
    pub currency: String,
    pub commission: Option<Decimal>,
    pub external_reference_id: Option<String>,
    pub payment_method: Option<String>,
    pub payment_channel: Option<String>,
}

impl EventPayload for TransactionStatusChangedPayload {
    const EVENT: WebhookEvent = WebhookEvent::PaymentTransactionStatusChanged;
}

/// Body of `PAYMENT.REFUND_STATUS_CHANGED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundStatusChangedPayload {
    pub refund_id: String,
    pub transaction_id: String,
    pub point_id: String,
    pub status: RefundStatus,
    pub amount: Decimal,
    pub external_reference_id: Option<String>,
}

impl EventPayload for RefundStatusChangedPayload {
    const EVENT: WebhookEvent = WebhookEvent::PaymentRefundStatusChanged;
}

/// Body of `PAYMENT.TRANSACTION_BLIK_STATUS_CHANGED`.
///
/// `external_status` is passed through from the BLIK operator unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlikStatusChangedPayload {
    pub transaction_id: String,
    pub action_id: String,
    pub external_status: String,
    pub external_id: String,
}

impl EventPayload for TransactionBlikStatusChangedPayload {
    const EVENT: WebhookEvent = WebhookEvent::PaymentTransactionBlikStatusChanged;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fixtures are objects"),
        }
    }

    #[test]
    fn test_transaction_payload_with_nulls() {
        let payload = TransactionStatusChangedPayload::from_fields(fields(json!({
            "transactionId": "FJRS-LY7-3W0-30K9",
            "pointId": "000cb241",
            "status": "CREATED",
            "amount": "10.00",
            "currency": "PLN",
            "commission": null,
            "externalReferenceId": null,
            "paymentMethod": null,
            "paymentChannel": null
        })))
        .unwrap();

        assert_eq!(payload.transaction_id, "FJRS-LY7-3W0-30K9");
        assert_eq!(payload.status, TransactionStatus::Created);
        assert_eq!(payload.amount.to_string(), "10.00");
        assert_eq!(payload.currency, "PLN");
        assert!(payload.commission.is_none());
        assert!(payload.payment_channel.is_none());
    }

    #[test]
    fn test_transaction_payload_with_optionals() {
        let payload = TransactionStatusChangedPayload::from_fields(fields(json!({
            "transactionId": "T1",
            "pointId": "P1",
            "status": "PAID",
            "amount": "99.99",
            "currency": "EUR",
            "commission": "1.50",
            "externalReferenceId": "ORDER-1",
            "paymentMethod": "BLIK",
            "paymentChannel": "blik"
        })))
        .unwrap();

        assert_eq!(payload.status, TransactionStatus::Paid);
        assert_eq!(payload.commission.map(|c| c.to_string()).as_deref(), Some("1.50"));
        assert_eq!(payload.external_reference_id.as_deref(), Some("ORDER-1"));
        assert_eq!(payload.payment_method.as_deref(), Some("BLIK"));
    }

    #[test]
    fn test_refund_payload_missing_optional_field() {
        let payload = RefundStatusChangedPayload::from_fields(fields(json!({
            "refundId": "REF-LY7-3W0",
            "transactionId": "FJRS-LY7-3W0-30K9",
            "pointId": "000cb241",
            "status": "DONE",
            "amount": "10.00"
        })))
        .unwrap();

        assert_eq!(payload.refund_id, "REF-LY7-3W0");
        assert_eq!(payload.status, RefundStatus::Done);
        assert!(payload.external_reference_id.is_none());
    }

    #[test]
    fn test_refund_payload_unknown_status_fails() {
        let result = RefundStatusChangedPayload::from_fields(fields(json!({
            "refundId": "R1",
            "transactionId": "T1",
            "pointId": "P1",
            "status": "SOMETHING_ELSE",
            "amount": "10.00"
        })));
        assert!(result.is_err());
    }

    #[test]
    fn test_blik_payload() {
        let payload = TransactionBlikStatusChangedPayload::from_fields(fields(json!({
            "transactionId": "T1",
            "actionId": "A1",
            "externalStatus": "SUCCESS",
            "externalId": "E1"
        })))
        .unwrap();

        assert_eq!(payload.action_id, "A1");
        assert_eq!(payload.external_status, "SUCCESS");
        assert_eq!(
            TransactionBlikStatusChangedPayload::EVENT,
            WebhookEvent::PaymentTransactionBlikStatusChanged
        );
    }
}
