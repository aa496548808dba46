//! Transaction requests, responses and their value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::status::{
    Currency, CustomerType, ItemType, PaymentMethod, ProductType, ShippingMethod,
    TransactionStatus,
};
use crate::validation::{
    InvalidValueError, validate_amount, validate_country_code, validate_email,
    validate_ip, validate_quantity, validate_url,
};

/// Payer details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl Customer {
    pub fn validate(&self) -> Result<(), InvalidValueError> {
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(ip) = &self.ip {
            validate_ip(ip)?;
        }
        if let Some(country) = &self.country {
            validate_country_code(country)?;
        }
        Ok(())
    }
}

/// Billing or shipping address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

impl Address {
    pub fn validate(&self) -> Result<(), InvalidValueError> {
        match &self.country {
            Some(country) => validate_country_code(country),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<ShippingMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<CustomerType>,
}

/// Where the payer lands after completing or abandoning the payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl Redirect {
    pub fn validate(&self) -> Result<(), InvalidValueError> {
        if let Some(success) = &self.success {
            validate_url(success, "success")?;
        }
        if let Some(failure) = &self.failure {
            validate_url(failure, "failure")?;
        }
        Ok(())
    }
}

/// One cart line. Monetary fields are decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
}

impl CartItem {
    pub fn validate(&self) -> Result<(), InvalidValueError> {
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        for amount in [&self.unit_price, &self.tax_amount, &self.total_amount]
            .into_iter()
            .flatten()
        {
            validate_amount(amount)?;
        }
        Ok(())
    }
}

/// Body of `POST /payment/points/{pointId}/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub amount: Decimal,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Redirect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart: Option<Vec<CartItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_registration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelabel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_capture: Option<bool>,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<OffsetDateTime>,
}

impl CreateTransactionRequest {
    /// A request with only the required fields set.
    pub fn new(amount: Decimal, title: impl Into<String>) -> Self {
        Self {
            amount,
            title: title.into(),
            currency: None,
            description: None,
            external_reference_id: None,
            redirect: None,
            customer: None,
            order: None,
            billing_address: None,
            shipping_address: None,
            cart: None,
            payment_method: None,
            payment_channel: None,
            create_registration: None,
            whitelabel: None,
            auto_capture: None,
            expires_at: None,
        }
    }

    /// Check every nested value object.
    pub fn validate(&self) -> Result<(), InvalidValueError> {
        validate_amount(&self.amount.to_string())?;
        validate_value_objects(
            self.customer.as_ref(),
            [self.billing_address.as_ref(), self.shipping_address.as_ref()],
            self.redirect.as_ref(),
            self.cart.as_deref(),
        )
    }
}

fn validate_value_objects(
    customer: Option<&Customer>,
    addresses: [Option<&Address>; 2],
    redirect: Option<&Redirect>,
    cart: Option<&[CartItem]>,
) -> Result<(), InvalidValueError> {
    if let Some(redirect) = redirect {
        redirect.validate()?;
    }
    if let Some(customer) = customer {
        customer.validate()?;
    }
    for address in addresses.into_iter().flatten() {
        address.validate()?;
    }
    for item in cart.into_iter().flatten() {
        item.validate()?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionResponse {
    pub id: String,
    pub redirect_url: String,
    /// Present only for white-label transactions; its shape depends on the
    /// payment channel.
    #[serde(default)]
    pub whitelabel: Option<serde_json::Value>,
}

/// A transaction as returned by `GET .../transactions/{transactionId}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub status: TransactionStatus,
    pub amount: Decimal,
    pub currency: Currency,
    pub title: String,
    #[serde(default)]
    pub commission: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub order: Option<Order>,
    #[serde(default)]
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub external_reference_id: Option<String>,
    #[serde(default)]
    pub redirect: Option<Redirect>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_channel: Option<String>,
    #[serde(default)]
    pub whitelabel: Option<bool>,
    #[serde(default)]
    pub cart: Option<Vec<CartItem>>,
    #[serde(default)]
    pub auto_capture: Option<bool>,
    #[serde(default)]
    pub is_captured: Option<bool>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub captured_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub paid_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
}

impl Transaction {
    /// Apply the same value-object checks as outbound requests to the
    /// nested customer, addresses, redirect and cart of a fetched
    /// transaction.
    pub fn validate(&self) -> Result<(), InvalidValueError> {
        validate_value_objects(
            self.customer.as_ref(),
            [self.billing_address.as_ref(), self.shipping_address.as_ref()],
            self.redirect.as_ref(),
            self.cart.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_minimal_request_serializes_required_fields_only() {
        let request = CreateTransactionRequest::new(Decimal::from_str("10.00").unwrap(), "Order #1");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"amount": "10.00", "title": "Order #1"})
        );
    }

    #[test]
    fn test_full_request_serializes_camel_case() {
        let mut request =
            CreateTransactionRequest::new(Decimal::from_str("99.99").unwrap(), "Order #2");
        request.currency = Some(Currency::Pln);
        request.external_reference_id = Some("REF-2".to_owned());
        request.payment_method = Some(PaymentMethod::Blik);
        request.auto_capture = Some(true);
        request.redirect = Some(Redirect {
            success: Some("https://shop.example.com/ok".to_owned()),
            failure: None,
        });
        request.customer = Some(Customer {
            email: Some("jan@example.com".to_owned()),
            email_verified: Some(true),
            ..Default::default()
        });
        request.cart = Some(vec![CartItem {
            name: Some("Mug".to_owned()),
            quantity: Some(2),
            unit_price: Some("12.50".to_owned()),
            item_type: Some(ItemType::Product),
            ..Default::default()
        }]);
        request.expires_at = Some(time::macros::datetime!(2024-09-20 09:48:03 +02:00));

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["currency"], "PLN");
        assert_eq!(value["externalReferenceId"], "REF-2");
        assert_eq!(value["paymentMethod"], "BLIK");
        assert_eq!(value["autoCapture"], true);
        assert_eq!(value["redirect"], json!({"success": "https://shop.example.com/ok"}));
        assert_eq!(value["customer"], json!({"email": "jan@example.com", "emailVerified": true}));
        assert_eq!(
            value["cart"],
            json!([{"name": "Mug", "quantity": 2, "unitPrice": "12.50", "type": "PRODUCT"}])
        );
        assert_eq!(value["expiresAt"], "2024-09-20T09:48:03+02:00");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_validate_rejects_nested_values() {
        let mut request = CreateTransactionRequest::new(Decimal::ONE, "t");
        assert!(request.validate().is_ok());

        request.customer = Some(Customer {
            email: Some("invalid-email".to_owned()),
            ..Default::default()
        });
        assert_eq!(
            request.validate(),
            Err(InvalidValueError::Email("invalid-email".to_owned()))
        );

        request.customer = None;
        request.shipping_address = Some(Address {
            country: Some("POL".to_owned()),
            ..Default::default()
        });
        assert_eq!(
            request.validate(),
            Err(InvalidValueError::CountryCode("POL".to_owned()))
        );

        request.shipping_address = None;
        request.cart = Some(vec![CartItem {
            quantity: Some(0),
            ..Default::default()
        }]);
        assert_eq!(request.validate(), Err(InvalidValueError::Quantity(0)));

        request.cart = Some(vec![CartItem {
            total_amount: Some("-5".to_owned()),
            ..Default::default()
        }]);
        assert_eq!(
            request.validate(),
            Err(InvalidValueError::Amount("-5".to_owned()))
        );

        request.cart = None;
        request.redirect = Some(Redirect {
            success: None,
            failure: Some("nope".to_owned()),
        });
        assert!(matches!(
            request.validate(),
            Err(InvalidValueError::Url { field: "failure", .. })
        ));
    }

    #[test]
    fn test_transaction_deserializes() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": "FJRS-LY7-3W0-30K9",
            "status": "PAID",
            "amount": "10.00",
            "currency": "PLN",
            "title": "Order #1",
            "commission": "0.25",
            "customer": {"name": "Jan Kowalski", "email": "jan@example.com"},
            "order": {"id": "O-1", "shippingMethod": "LOCKER_PICKUP", "customerType": "B2C"},
            "cart": [{"name": "Mug", "quantity": 1}],
            "isCaptured": true,
            "paidAt": "2024-09-20T09:48:03+02:00",
            "createdAt": "2024-09-20T09:40:00+02:00"
        }))
        .unwrap();

        assert_eq!(transaction.status, TransactionStatus::Paid);
        assert_eq!(transaction.currency, Currency::Pln);
        assert_eq!(transaction.customer.unwrap().name.as_deref(), Some("Jan Kowalski"));
        let order = transaction.order.unwrap();
        assert_eq!(order.shipping_method, Some(ShippingMethod::LockerPickup));
        assert_eq!(order.customer_type, Some(CustomerType::B2c));
        assert_eq!(transaction.is_captured, Some(true));
        assert_eq!(
            transaction.paid_at,
            Some(time::macros::datetime!(2024-09-20 09:48:03 +02:00))
        );
        assert!(transaction.expires_at.is_none());
    }

    #[test]
    fn test_transaction_validate_checks_nested_objects() {
        let mut transaction: Transaction = serde_json::from_value(json!({
            "id": "T1",
            "status": "PAID",
            "amount": "10.00",
            "currency": "PLN",
            "title": "Order #1",
            "customer": {"email": "jan@example.com"},
            "billingAddress": {"country": "PL"},
            "cart": [{"name": "Mug", "quantity": 1}]
        }))
        .unwrap();
        assert!(transaction.validate().is_ok());

        transaction.billing_address = Some(Address {
            country: Some("Poland".to_owned()),
            ..Default::default()
        });
        assert_eq!(
            transaction.validate(),
            Err(InvalidValueError::CountryCode("Poland".to_owned()))
        );

        transaction.billing_address = None;
        transaction.cart = Some(vec![CartItem {
            quantity: Some(0),
            ..Default::default()
        }]);
        assert_eq!(transaction.validate(), Err(InvalidValueError::Quantity(0)));
    }
}
