//! Paymentic webhook receiver.
//!
//! # Endpoints
//!
//! - `POST /paymentic` – verify and log one webhook delivery
//!
//! Paymentic retries deliveries that do not get a 2xx answer, so events the
//! handler has no decoder for are acknowledged and dropped instead of being
//! rejected.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use paymentic_sdk::{Webhook, WebhookError, WebhookPayload};
use std::borrow::Cow;

use crate::state::AppState;

/// Build the webhook router.
pub fn router() -> Router<AppState> {
    Router::new().route("/paymentic", post(receive_webhook))
}

/// `POST /paymentic` – verify the signature and decode the event.
async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, WebhookApiError> {
    let raw_body = String::from_utf8(body.to_vec()).map_err(|_| WebhookApiError::NonUtf8Body)?;

    // Opaque bytes are replaced, not dropped.
    let pairs: Vec<(&str, Cow<'_, str>)> = headers
        .iter()
        .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())))
        .collect();

    let result = state
        .webhook_handler()
        .await
        .handle(pairs.as_slice(), raw_body);

    match result {
        Ok(webhook) => {
            log_webhook(&webhook);
            Ok(StatusCode::OK)
        }
        Err(WebhookError::UnsupportedEvent(event)) => {
            tracing::warn!(event = %event, "No decoder registered, dropping webhook");
            Ok(StatusCode::OK)
        }
        Err(e) => Err(WebhookApiError::Rejected(e)),
    }
}

fn log_webhook(webhook: &Webhook) {
    let notification_id = webhook.notification_id();
    match webhook.payload() {
        WebhookPayload::TransactionStatusChanged(payload) => tracing::info!(
            notification_id,
            transaction_id = %payload.transaction_id,
            point_id = %payload.point_id,
            status = %payload.status,
            amount = %payload.amount,
            currency = %payload.currency,
            "Transaction status changed"
        ),
        WebhookPayload::RefundStatusChanged(payload) => tracing::info!(
            notification_id,
            refund_id = %payload.refund_id,
            transaction_id = %payload.transaction_id,
            status = %payload.status,
            amount = %payload.amount,
            "Refund status changed"
        ),
        WebhookPayload::TransactionBlikStatusChanged(payload) => tracing::info!(
            notification_id,
            transaction_id = %payload.transaction_id,
            action_id = %payload.action_id,
            external_status = %payload.external_status,
            "BLIK status changed"
        ),
    }
}

/// Errors that reject a delivery.
#[derive(Debug)]
enum WebhookApiError {
    NonUtf8Body,
    Rejected(WebhookError),
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebhookApiError::NonUtf8Body => (StatusCode::BAD_REQUEST, "body is not valid UTF-8"),
            WebhookApiError::Rejected(WebhookError::InvalidSignature) => {
                (StatusCode::UNAUTHORIZED, "invalid webhook signature")
            }
            WebhookApiError::Rejected(WebhookError::InvalidEventValue(_)) => {
                (StatusCode::BAD_REQUEST, "invalid webhook event")
            }
            WebhookApiError::Rejected(WebhookError::MalformedBody(_)) => {
                (StatusCode::BAD_REQUEST, "malformed webhook body")
            }
            WebhookApiError::Rejected(WebhookError::InvalidPayload { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid webhook payload")
            }
            WebhookApiError::Rejected(WebhookError::UnsupportedEvent(_)) => {
                (StatusCode::OK, "unsupported webhook event")
            }
        };
        match &self {
            WebhookApiError::NonUtf8Body => tracing::warn!("Rejected webhook: {}", message),
            WebhookApiError::Rejected(e) => tracing::warn!(error = %e, "Rejected webhook"),
        }
        (status, message).into_response()
    }
}
