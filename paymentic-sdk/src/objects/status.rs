//! Enumerations shared by requests, responses and webhook payloads.
//!
//! All of them travel as SCREAMING_SNAKE_CASE strings.

use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Lifecycle of a payment transaction.
    pub enum TransactionStatus {
        Created => "CREATED",
        Pending => "PENDING",
        Paid => "PAID",
        Failed => "FAILED",
        Expired => "EXPIRED",
    }
}

wire_enum! {
    /// Lifecycle of a refund.
    pub enum RefundStatus {
        Created => "CREATED",
        Accepted => "ACCEPTED",
        Pending => "PENDING",
        Done => "DONE",
        Rejected => "REJECTED",
        Cancelled => "CANCELLED",
    }
}

wire_enum! {
    pub enum PaymentMethod {
        Blik => "BLIK",
        Pbl => "PBL",
        Bnpl => "BNPL",
        Card => "CARD",
        MobileWallet => "MOBILE_WALLET",
        Paysafe => "PAYSAFE",
    }
}

wire_enum! {
    /// How a BLIK payment is authorized: a one-time code or a saved alias.
    pub enum BlikType {
        Code => "CODE",
        Alias => "ALIAS",
    }
}

impl Default for BlikType {
    fn default() -> Self {
        BlikType::Code
    }
}

wire_enum! {
    pub enum Currency {
        Pln => "PLN",
        Eur => "EUR",
    }
}

wire_enum! {
    pub enum CustomerType {
        B2b => "B2B",
        B2c => "B2C",
    }
}

wire_enum! {
    pub enum ShippingMethod {
        Virtual => "VIRTUAL",
        TrackedDelivery => "TRACKED_DELIVERY",
        UntrackedDelivery => "UNTRACKED_DELIVERY",
        InStorePickup => "IN_STORE_PICKUP",
        ParcelPickup => "PARCEL_PICKUP",
        LockerPickup => "LOCKER_PICKUP",
        Hybrid => "HYBRID",
        Other => "OTHER",
    }
}

wire_enum! {
    /// Kind of line in a shopping cart.
    pub enum ItemType {
        Product => "PRODUCT",
        Shipping => "SHIPPING",
        Discount => "DISCOUNT",
        Surcharge => "SURCHARGE",
        GiftCard => "GIFT_CARD",
    }
}

wire_enum! {
    pub enum ProductType {
        Physical => "PHYSICAL",
        Digital => "DIGITAL",
        Service => "SERVICE",
        Virtual => "VIRTUAL",
    }
}

wire_enum! {
    /// How the payer authorizes a payment in a given channel.
    pub enum AuthorizationType {
        Redirect => "REDIRECT",
        MultiFactor => "MULTI_FACTOR",
        ScanCode => "SCAN_CODE",
        AppNotification => "APP_NOTIFICATION",
    }
}
