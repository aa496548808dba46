//! BLIK payment authorization.

use serde::{Deserialize, Serialize};

use super::status::BlikType;

/// Body of `POST .../transactions/{transactionId}/blik`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessBlikRequest {
    #[serde(rename = "type")]
    pub blik_type: BlikType,
    /// Six-digit BLIK code, or the alias key for [`BlikType::Alias`].
    pub code: String,
}

impl ProcessBlikRequest {
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            blik_type: BlikType::Code,
            code: code.into(),
        }
    }

    pub fn alias(code: impl Into<String>) -> Self {
        Self {
            blik_type: BlikType::Alias,
            code: code.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessBlikResponse {
    pub action_id: String,
    #[serde(default)]
    pub alias: Option<serde_json::Value>,
}
