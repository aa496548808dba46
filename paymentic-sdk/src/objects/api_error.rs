//! Error entries returned by the Paymentic API in `{"errors": [...]}`.

use serde::{Deserialize, Serialize};

/// Error codes the SDK recognizes. Unknown codes are kept only as
/// [`ApiError::raw_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    ValidationError,
    TransactionNotFound,
    RefundAmountTooHigh,
}

impl ApiErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorCode::ValidationError => "VALIDATION_ERROR",
            ApiErrorCode::TransactionNotFound => "TRANSACTION_NOT_FOUND",
            ApiErrorCode::RefundAmountTooHigh => "REFUND_AMOUNT_TOO_HIGH",
        }
    }

    pub fn try_from_str(code: Option<&str>) -> Option<Self> {
        match code? {
            "VALIDATION_ERROR" => Some(ApiErrorCode::ValidationError),
            "TRANSACTION_NOT_FOUND" => Some(ApiErrorCode::TransactionNotFound),
            "REFUND_AMOUNT_TOO_HIGH" => Some(ApiErrorCode::RefundAmountTooHigh),
            _ => None,
        }
    }
}

/// A single API error entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawApiError")]
pub struct ApiError {
    pub message: String,
    pub field: Option<String>,
    pub code: Option<ApiErrorCode>,
    pub raw_code: Option<String>,
}

#[derive(Deserialize)]
struct RawApiError {
    message: Option<String>,
    field: Option<String>,
    code: Option<String>,
}

impl From<RawApiError> for ApiError {
    fn from(raw: RawApiError) -> Self {
        Self {
            message: raw.message.unwrap_or_else(|| "Unknown error".to_owned()),
            field: raw.field,
            code: ApiErrorCode::try_from_str(raw.code.as_deref()),
            raw_code: raw.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code() {
        let error: ApiError = serde_json::from_str(
            r#"{"message":"Amount is required","field":"amount","code":"VALIDATION_ERROR"}"#,
        )
        .unwrap();
        assert_eq!(error.message, "Amount is required");
        assert_eq!(error.field.as_deref(), Some("amount"));
        assert_eq!(error.code, Some(ApiErrorCode::ValidationError));
        assert_eq!(error.raw_code.as_deref(), Some("VALIDATION_ERROR"));
    }

    #[test]
    fn test_unknown_code_keeps_raw_value() {
        let error: ApiError = serde_json::from_str(r#"{"code":"UNKNOWN_CODE"}"#).unwrap();
        assert_eq!(error.message, "Unknown error");
        assert_eq!(error.code, None);
        assert_eq!(error.raw_code.as_deref(), Some("UNKNOWN_CODE"));
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            ApiErrorCode::try_from_str(Some("TRANSACTION_NOT_FOUND")),
            Some(ApiErrorCode::TransactionNotFound)
        );
        assert_eq!(ApiErrorCode::try_from_str(None), None);
        assert_eq!(ApiErrorCode::RefundAmountTooHigh.as_str(), "REFUND_AMOUNT_TOO_HIGH");
    }
}
