pub mod api_error;
pub mod blik;
pub mod channel;
pub mod refund;
pub mod status;
pub mod transaction;
pub mod webhook;

pub use api_error::{ApiError, ApiErrorCode};
pub use status::{
    AuthorizationType, BlikType, Currency, CustomerType, ItemType, PaymentMethod, ProductType,
    RefundStatus, ShippingMethod, TransactionStatus,
};
pub use webhook::{
    RefundStatusChangedPayload, TransactionBlikStatusChangedPayload,
    TransactionStatusChangedPayload,
};
