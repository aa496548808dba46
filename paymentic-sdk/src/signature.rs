//! Signature algorithm and verification for Paymentic webhooks.
//!
//! Every webhook delivery is signed with HMAC-SHA512 over a canonical,
//! pipe-delimited signing string:
//!
//! ```text
//! {event}|{protocol_version}|{raw_body}|{notification_id}|{time}
//! ```
//!
//! The digest travels base64-encoded (RFC 4648, padded) in the
//! `X-Paymentic-Signature` header.

use crate::webhook::WebhookEvent;

/// Header carrying the event type, e.g. `PAYMENT.TRANSACTION_STATUS_CHANGED`.
pub const EVENT_HEADER: &str = "x-paymentic-event";

/// Header carrying the opaque notification identifier.
pub const NOTIFICATION_ID_HEADER: &str = "x-paymentic-notification-id";

/// Header carrying the delivery time (ISO-8601 with offset).
pub const TIME_HEADER: &str = "x-paymentic-time";

/// Header carrying the base64-encoded HMAC-SHA512 signature.
pub const SIGNATURE_HEADER: &str = "x-paymentic-signature";

/// Header the protocol version is extracted from.
pub const USER_AGENT_HEADER: &str = "user-agent";

/// Protocol version used when the user agent does not announce one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "1.2";

/// Errors produced by signature operations.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("invalid signature")]
    SignatureMismatch,
}

impl From<ring::error::Unspecified> for SignatureError {
    fn from(_: ring::error::Unspecified) -> Self {
        Self::SignatureMismatch
    }
}

/// Build the canonical signing string.
///
/// `raw_body` goes in verbatim; re-serialized JSON will not verify.
pub fn signing_string(
    event: WebhookEvent,
    version: &str,
    raw_body: &str,
    notification_id: &str,
    time: &str,
) -> String {
    format!(
        "{}|{version}|{raw_body}|{notification_id}|{time}",
        event.as_str()
    )
}

/// Compute `base64(HMAC-SHA512(data, key))`.
pub fn sign(data: &str, key: &[u8]) -> String {
    let tag = ring::hmac::sign(
        &ring::hmac::Key::new(ring::hmac::HMAC_SHA512, key),
        data.as_bytes(),
    );
    fast32::base64::RFC4648.encode(tag.as_ref())
}

/// Verify a base64 signature against `data` in constant time.
///
/// A signature that is not valid base64 is reported as a mismatch.
pub fn verify(data: &str, signature: &str, key: &[u8]) -> Result<(), SignatureError> {
    let signature_bytes = fast32::base64::RFC4648
        .decode_str(signature)
        .map_err(|_| SignatureError::SignatureMismatch)?;
    ring::hmac::verify(
        &ring::hmac::Key::new(ring::hmac::HMAC_SHA512, key),
        data.as_bytes(),
        &signature_bytes,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_string_layout() {
        let data = signing_string(
            WebhookEvent::PaymentRefundStatusChanged,
            "1.2",
            r#"{"a":1}"#,
            "n1",
            "2024-09-20T09:48:03+02:00",
        );
        assert_eq!(
            data,
            r#"PAYMENT.REFUND_STATUS_CHANGED|1.2|{"a":1}|n1|2024-09-20T09:48:03+02:00"#
        );
    }

    #[test]
    fn test_body_with_pipes_is_kept_verbatim() {
        let data = signing_string(
            WebhookEvent::PaymentTransactionStatusChanged,
            "1.1",
            "a|b",
            "n",
            "t",
        );
        assert_eq!(data, "PAYMENT.TRANSACTION_STATUS_CHANGED|1.1|a|b|n|t");
    }

    #[test]
    fn test_sign_produces_padded_sha512_digest() {
        let signature = sign("payload", b"key");
        // 64 raw bytes encode to 88 base64 characters ending in `==`.
        assert_eq!(signature.len(), 88);
        assert!(signature.ends_with("=="));
    }

    #[test]
    fn test_verify_accepts_own_signature() {
        let signature = sign("payload", b"key");
        assert!(verify("payload", &signature, b"key").is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_key_and_data() {
        let signature = sign("payload", b"key");
        assert!(matches!(
            verify("payload", &signature, b"other-key"),
            Err(SignatureError::SignatureMismatch)
        ));
        assert!(matches!(
            verify("payloaD", &signature, b"key"),
            Err(SignatureError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(verify("payload", "not base64 !!", b"key").is_err());
        assert!(verify("payload", "", b"key").is_err());
    }
}
