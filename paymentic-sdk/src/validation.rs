//! Field validation for outbound request objects.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::net::IpAddr;
use std::str::FromStr;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = email_pattern();
}

#[allow(clippy::expect_used)]
fn email_pattern() -> Regex {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
}

/// A request field holds a value the API would reject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidValueError {
    #[error("Invalid email format: \"{0}\"")]
    Email(String),
    #[error("Invalid IP address: \"{0}\"")]
    Ip(String),
    #[error("Invalid URL for {field}: \"{url}\"")]
    Url { field: &'static str, url: String },
    #[error("Invalid country code (expected ISO 3166-1 alpha-2): \"{0}\"")]
    CountryCode(String),
    #[error("Quantity must be greater than 0, got: {0}")]
    Quantity(i64),
    #[error("Amount must be a positive numeric string, got: \"{0}\"")]
    Amount(String),
}

pub fn validate_email(email: &str) -> Result<(), InvalidValueError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(InvalidValueError::Email(email.to_owned()))
    }
}

pub fn validate_ip(ip: &str) -> Result<(), InvalidValueError> {
    IpAddr::from_str(ip)
        .map(|_| ())
        .map_err(|_| InvalidValueError::Ip(ip.to_owned()))
}

/// Absolute URL with a scheme and host.
pub fn validate_url(url: &str, field: &'static str) -> Result<(), InvalidValueError> {
    match url::Url::parse(url) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        _ => Err(InvalidValueError::Url {
            field,
            url: url.to_owned(),
        }),
    }
}

/// Two ASCII letters (ISO 3166-1 alpha-2 shape).
pub fn validate_country_code(country: &str) -> Result<(), InvalidValueError> {
    if country.len() == 2 && country.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(InvalidValueError::CountryCode(country.to_owned()))
    }
}

pub fn validate_quantity(quantity: i64) -> Result<(), InvalidValueError> {
    if quantity > 0 {
        Ok(())
    } else {
        Err(InvalidValueError::Quantity(quantity))
    }
}

/// A decimal string that is zero or greater.
pub fn validate_amount(amount: &str) -> Result<(), InvalidValueError> {
    match Decimal::from_str(amount.trim()) {
        Ok(value) if !value.is_sign_negative() || value.is_zero() => Ok(()),
        _ => Err(InvalidValueError::Amount(amount.to_owned())),
    }
}
