//! Payment channels available on a point of sale.

use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;

use super::status::{AuthorizationType, PaymentMethod};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChannelImage {
    #[serde(default)]
    pub default: Option<String>,
}

/// Amount range the channel accepts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelAmount {
    pub minimum: Decimal,
    pub maximum: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChannelCommission {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub minimum: Option<String>,
    #[serde(default)]
    pub fixed: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChannelAuthorization {
    #[serde(default, rename = "type")]
    pub types: Vec<AuthorizationType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub available: bool,
    pub method: PaymentMethod,
    pub name: String,
    #[serde(default)]
    pub image: ChannelImage,
    pub amount: ChannelAmount,
    #[serde(default)]
    pub currencies: Vec<String>,
    #[serde(default)]
    pub commission: ChannelCommission,
    #[serde(default)]
    pub authorization: ChannelAuthorization,
    pub payment_type: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub enabling_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub disabling_at: Option<OffsetDateTime>,
}

impl Channel {
    /// Whether `amount` falls inside the channel's accepted range.
    pub fn accepts_amount(&self, amount: Decimal) -> bool {
        self.amount.minimum <= amount && amount <= self.amount.maximum
    }
}
