use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::hash::BuildHasher;

use super::{WebhookError, WebhookEvent};
use crate::signature::{
    DEFAULT_PROTOCOL_VERSION, EVENT_HEADER, NOTIFICATION_ID_HEADER, SIGNATURE_HEADER,
    TIME_HEADER, USER_AGENT_HEADER,
};

lazy_static! {
    static ref VERSION_PATTERN: Regex = version_pattern();
}

#[allow(clippy::expect_used)]
fn version_pattern() -> Regex {
    Regex::new(r"Paymentic/([0-9]+\.[0-9]+)").expect("version pattern is a valid regex")
}

/// The signed fields of a webhook delivery, extracted from transport headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookHeaders {
    pub event: WebhookEvent,
    pub notification_id: String,
    /// Delivery time, used verbatim in the signing string.
    pub time: String,
    /// Base64 HMAC-SHA512 supplied by the sender.
    pub signature: String,
    pub user_agent: String,
}

impl WebhookHeaders {
    pub fn new(
        event: WebhookEvent,
        notification_id: impl Into<String>,
        time: impl Into<String>,
        signature: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            event,
            notification_id: notification_id.into(),
            time: time.into(),
            signature: signature.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Build from raw `(name, value)` header pairs.
    ///
    /// Names are matched case-insensitively; if a name repeats, the last
    /// pair wins. Missing headers read as empty strings, so an absent event
    /// header fails here as an invalid event value and an absent signature
    /// fails later during verification.
    pub fn from_pairs<I, K, V>(headers: I) -> Result<Self, WebhookError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let normalized: HashMap<String, String> = headers
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_lowercase(), value.as_ref().to_owned()))
            .collect();
        let field = |name: &str| normalized.get(name).cloned().unwrap_or_default();

        Ok(Self {
            event: field(EVENT_HEADER).parse()?,
            notification_id: field(NOTIFICATION_ID_HEADER),
            time: field(TIME_HEADER),
            signature: field(SIGNATURE_HEADER),
            user_agent: field(USER_AGENT_HEADER),
        })
    }

    /// Build from a header map.
    ///
    /// A map can hold one name under several casings. The already lower-case
    /// key wins; other casings are ordered by their exact bytes and the
    /// greatest one wins. The outcome never depends on the map's iteration
    /// order.
    pub fn from_map<K, V, S>(headers: &HashMap<K, V, S>) -> Result<Self, WebhookError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
        S: BuildHasher,
    {
        let mut entries: Vec<(&str, &str)> = headers
            .iter()
            .map(|(key, value)| (key.as_ref(), value.as_ref()))
            .collect();
        // Later entries win in from_pairs.
        entries.sort_unstable_by_key(|(key, _)| (!key.chars().any(char::is_uppercase), *key));
        Self::from_pairs(entries)
    }

    /// Protocol version announced as `Paymentic/<major>.<minor>` in the user
    /// agent, or [`DEFAULT_PROTOCOL_VERSION`].
    pub fn version(&self) -> &str {
        VERSION_PATTERN
            .captures(&self.user_agent)
            .and_then(|captures| captures.get(1))
            .map_or(DEFAULT_PROTOCOL_VERSION, |version| version.as_str())
    }

    /// The headers under their lower-case wire names.
    pub fn to_map(&self) -> HashMap<&'static str, String> {
        HashMap::from([
            (EVENT_HEADER, self.event.as_str().to_owned()),
            (NOTIFICATION_ID_HEADER, self.notification_id.clone()),
            (TIME_HEADER, self.time.clone()),
            (SIGNATURE_HEADER, self.signature.clone()),
            (USER_AGENT_HEADER, self.user_agent.clone()),
        ])
    }
}

/// Inputs [`WebhookHandler::handle`](super::WebhookHandler::handle) accepts
/// as headers: raw header collections or an already-parsed
/// [`WebhookHeaders`].
pub trait IntoWebhookHeaders {
    fn into_webhook_headers(self) -> Result<WebhookHeaders, WebhookError>;
}

impl IntoWebhookHeaders for WebhookHeaders {
    fn into_webhook_headers(self) -> Result<WebhookHeaders, WebhookError> {
        Ok(self)
    }
}

impl IntoWebhookHeaders for &WebhookHeaders {
    fn into_webhook_headers(self) -> Result<WebhookHeaders, WebhookError> {
        Ok(self.clone())
    }
}

impl<K, V, S> IntoWebhookHeaders for &HashMap<K, V, S>
where
    K: AsRef<str>,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn into_webhook_headers(self) -> Result<WebhookHeaders, WebhookError> {
        WebhookHeaders::from_map(self)
    }
}

impl<K, V> IntoWebhookHeaders for &[(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn into_webhook_headers(self) -> Result<WebhookHeaders, WebhookError> {
        WebhookHeaders::from_pairs(self.iter().map(|(key, value)| (key, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_case_headers() -> Vec<(&'static str, &'static str)> {
        vec![
            ("X-Paymentic-Event", "PAYMENT.TRANSACTION_STATUS_CHANGED"),
            ("X-Paymentic-Notification-Id", "notification-123"),
            ("X-Paymentic-Time", "2024-09-20T09:48:03+02:00"),
            ("X-Paymentic-Signature", "c2lnbmF0dXJl"),
            ("User-Agent", "Paymentic/1.2"),
        ]
    }

    #[test]
    fn test_from_pairs_reads_all_fields() {
        let headers = WebhookHeaders::from_pairs(mixed_case_headers()).unwrap();
        assert_eq!(headers.event, WebhookEvent::PaymentTransactionStatusChanged);
        assert_eq!(headers.notification_id, "notification-123");
        assert_eq!(headers.time, "2024-09-20T09:48:03+02:00");
        assert_eq!(headers.signature, "c2lnbmF0dXJl");
        assert_eq!(headers.user_agent, "Paymentic/1.2");
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let lower: Vec<(String, &str)> = mixed_case_headers()
            .into_iter()
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect();
        let upper: Vec<(String, &str)> = mixed_case_headers()
            .into_iter()
            .map(|(key, value)| (key.to_uppercase(), value))
            .collect();

        let expected = WebhookHeaders::from_pairs(mixed_case_headers()).unwrap();
        assert_eq!(WebhookHeaders::from_pairs(lower).unwrap(), expected);
        assert_eq!(WebhookHeaders::from_pairs(upper).unwrap(), expected);
    }

    #[test]
    fn test_missing_optional_headers_default_to_empty() {
        let headers =
            WebhookHeaders::from_pairs([("x-paymentic-event", "PAYMENT.REFUND_STATUS_CHANGED")])
                .unwrap();
        assert_eq!(headers.notification_id, "");
        assert_eq!(headers.time, "");
        assert_eq!(headers.signature, "");
        assert_eq!(headers.user_agent, "");
        assert_eq!(headers.version(), DEFAULT_PROTOCOL_VERSION);
    }

    #[test]
    fn test_missing_event_is_invalid_event_value() {
        let result = WebhookHeaders::from_pairs([("user-agent", "Paymentic/1.2")]);
        assert!(matches!(result, Err(WebhookError::InvalidEventValue(value)) if value.is_empty()));
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let result = WebhookHeaders::from_pairs([("X-Paymentic-Event", "PAYMENT.UNKNOWN_EVENT")]);
        assert!(matches!(
            result,
            Err(WebhookError::InvalidEventValue(value)) if value == "PAYMENT.UNKNOWN_EVENT"
        ));
    }

    #[test]
    fn test_version_extraction() {
        let mut headers = WebhookHeaders::from_pairs(mixed_case_headers()).unwrap();

        headers.user_agent = "Paymentic/1.1".to_owned();
        assert_eq!(headers.version(), "1.1");

        headers.user_agent = "Mozilla/5.0 (compatible; Paymentic/2.10; +https://paymentic.com)".to_owned();
        assert_eq!(headers.version(), "2.10");

        headers.user_agent = "InvalidAgent".to_owned();
        assert_eq!(headers.version(), "1.2");

        headers.user_agent = "Paymentic/3".to_owned();
        assert_eq!(headers.version(), "1.2");
    }

    #[test]
    fn test_from_map_and_to_map() {
        let map: HashMap<String, String> = mixed_case_headers()
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        let headers = WebhookHeaders::from_map(&map).unwrap();
        let round = headers.to_map();

        assert_eq!(round[EVENT_HEADER], "PAYMENT.TRANSACTION_STATUS_CHANGED");
        assert_eq!(round[NOTIFICATION_ID_HEADER], "notification-123");
        assert_eq!(round[USER_AGENT_HEADER], "Paymentic/1.2");
        assert_eq!(round.len(), 5);
    }

    #[test]
    fn test_repeated_header_in_pairs_last_wins() {
        let headers = WebhookHeaders::from_pairs([
            ("X-Paymentic-Event", "PAYMENT.REFUND_STATUS_CHANGED"),
            ("X-Paymentic-Signature", "a"),
            ("x-paymentic-signature", "b"),
        ])
        .unwrap();
        assert_eq!(headers.signature, "b");

        let headers = WebhookHeaders::from_pairs([
            ("X-Paymentic-Event", "PAYMENT.REFUND_STATUS_CHANGED"),
            ("x-paymentic-signature", "b"),
            ("X-Paymentic-Signature", "a"),
        ])
        .unwrap();
        assert_eq!(headers.signature, "a");
    }

    #[test]
    fn test_repeated_header_in_map_prefers_lower_case_key() {
        // Fresh maps get fresh hasher seeds, so iteration order varies between runs.
        for _ in 0..200 {
            let map = HashMap::from([
                ("X-Paymentic-Event", "PAYMENT.REFUND_STATUS_CHANGED"),
                ("X-Paymentic-Signature", "first"),
                ("x-paymentic-signature", "second"),
            ]);
            assert_eq!(WebhookHeaders::from_map(&map).unwrap().signature, "second");
            assert_eq!((&map).into_webhook_headers().unwrap().signature, "second");
        }
    }

    #[test]
    fn test_repeated_header_in_map_without_lower_case_key() {
        for _ in 0..200 {
            let map = HashMap::from([
                ("X-Paymentic-Event", "PAYMENT.REFUND_STATUS_CHANGED"),
                ("X-PAYMENTIC-SIGNATURE", "upper"),
                ("X-Paymentic-Signature", "mixed"),
            ]);
            // "X-Paymentic-Signature" sorts after "X-PAYMENTIC-SIGNATURE".
            assert_eq!(WebhookHeaders::from_map(&map).unwrap().signature, "mixed");
        }
    }

    #[test]
    fn test_version_pattern_compiles() {
        assert!(version_pattern().is_match("Paymentic/1.2"));
    }

    #[test]
    fn test_into_webhook_headers_passes_parsed_headers_through() {
        let parsed = WebhookHeaders::new(
            WebhookEvent::PaymentRefundStatusChanged,
            "n1",
            "t1",
            "sig",
            "",
        );
        assert_eq!((&parsed).into_webhook_headers().unwrap(), parsed);
        assert_eq!(parsed.clone().into_webhook_headers().unwrap(), parsed);
    }
}
