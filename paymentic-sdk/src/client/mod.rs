//! HTTP client for the Paymentic REST API.
//!
//! Gated behind the `client` cargo feature so crates that only verify
//! webhooks do not pull in `reqwest`.
//!
//! Every request authenticates with `Authorization: Bearer {api_key}` and
//! every successful response wraps its result in `{"data": ...}`.

mod blik;
mod points;
mod refunds;
mod transactions;

pub use blik::BlikService;
pub use points::PointService;
pub use refunds::RefundService;
pub use transactions::TransactionService;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::Arc;
use url::Url;

use crate::config::{ConfigError, Environment, PaymenticConfig};
use crate::objects::ApiError;
use crate::validation::InvalidValueError;

/// Errors produced by the SDK HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("api error: {0}")]
    Api(#[from] ApiFailure),

    /// Request or response body could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL and endpoint path do not form a valid URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// A request object failed local validation and was not sent.
    #[error("invalid request: {0}")]
    InvalidValue(#[from] InvalidValueError),
}

/// Classification of a failed API call by HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFailureKind {
    BadRequest,
    Unauthorized,
    NotFound,
    Validation,
    Other,
}

impl ApiFailureKind {
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            400 => ApiFailureKind::BadRequest,
            401 => ApiFailureKind::Unauthorized,
            404 => ApiFailureKind::NotFound,
            422 => ApiFailureKind::Validation,
            _ => ApiFailureKind::Other,
        }
    }
}

/// A non-2xx API response with its decoded error list.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message} (status {status})")]
pub struct ApiFailure {
    pub kind: ApiFailureKind,
    pub status: StatusCode,
    /// First error's message, or a generic one when the list is empty.
    pub message: String,
    pub errors: Vec<ApiError>,
    /// Response body as received.
    pub body: String,
}

impl ApiFailure {
    /// Key under which [`errors_by_field`](Self::errors_by_field) groups
    /// errors that are not tied to a field.
    pub const GENERAL_FIELD: &'static str = "_general";

    fn from_response(status: StatusCode, body: String) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            errors: Vec<ApiError>,
        }

        let errors = serde_json::from_str::<ErrorBody>(&body)
            .map(|parsed| parsed.errors)
            .unwrap_or_default();
        let message = errors
            .first()
            .map_or_else(|| "An error occurred".to_owned(), |error| error.message.clone());

        Self {
            kind: ApiFailureKind::from_status(status),
            status,
            message,
            errors,
            body,
        }
    }

    pub fn first_error(&self) -> Option<&ApiError> {
        self.errors.first()
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors
            .iter()
            .any(|error| error.field.as_deref() == Some(field))
    }

    pub fn field_errors(&self, field: &str) -> Vec<&ApiError> {
        self.errors
            .iter()
            .filter(|error| error.field.as_deref() == Some(field))
            .collect()
    }

    pub fn errors_by_field(&self) -> BTreeMap<&str, Vec<&ApiError>> {
        let mut grouped: BTreeMap<&str, Vec<&ApiError>> = BTreeMap::new();
        for error in &self.errors {
            let key = error.field.as_deref().unwrap_or(Self::GENERAL_FIELD);
            grouped.entry(key).or_default().push(error);
        }
        grouped
    }
}

/// Shared request plumbing for all services.
pub(crate) struct Transport {
    http: Client,
    base_url: String,
    api_key: String,
}

impl Transport {
    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(Url::parse(&format!(
            "{}{path}",
            self.base_url.trim_end_matches('/')
        ))?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let body = self.send::<()>(Method::GET, path, None).await?;
        parse_data(&body)
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ClientError> {
        let body = self.send(Method::POST, path, Some(payload)).await?;
        parse_data(&body)
    }

    /// PATCH without a body; the response body is ignored.
    pub(crate) async fn patch(&self, path: &str) -> Result<(), ClientError> {
        self.send::<()>(Method::PATCH, path, None).await?;
        Ok(())
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
    ) -> Result<Vec<u8>, ClientError> {
        let url = self.url(path)?;
        tracing::debug!(method = %method, path, "Sending Paymentic API request");

        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(payload) = payload {
            request = request.body(serde_json::to_vec(payload)?);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let failure = ApiFailure::from_response(status, body);
            tracing::warn!(
                method = %method,
                path,
                status = status.as_u16(),
                message = %failure.message,
                "Paymentic API request failed"
            );
            return Err(failure.into());
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

fn parse_data<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    #[derive(serde::Deserialize)]
    struct DataEnvelope<T> {
        data: T,
    }

    let envelope: DataEnvelope<T> = serde_json::from_slice(body)?;
    Ok(envelope.data)
}

/// Percent-encode one path segment.
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

/// Builder for [`PaymenticClient`].
pub struct PaymenticClientBuilder {
    api_key: String,
    environment: Environment,
    base_url: Option<String>,
    http: Option<Client>,
}

impl PaymenticClientBuilder {
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_sandbox(self) -> Self {
        self.with_environment(Environment::Sandbox)
    }

    pub fn with_production(self) -> Self {
        self.with_environment(Environment::Production)
    }

    /// Send requests to `base_url` instead of the environment's URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn build(self) -> PaymenticClient {
        let transport = Arc::new(Transport {
            http: self.http.unwrap_or_default(),
            base_url: self
                .base_url
                .unwrap_or_else(|| self.environment.base_url().to_owned()),
            api_key: self.api_key,
        });
        PaymenticClient {
            payment: PaymentClient {
                transactions: TransactionService::new(transport.clone()),
                refunds: RefundService::new(transport.clone()),
                blik: BlikService::new(transport.clone()),
                points: PointService::new(transport),
            },
        }
    }
}

/// Entry point to the Paymentic API.
#[derive(Clone)]
pub struct PaymenticClient {
    payment: PaymentClient,
}

impl PaymenticClient {
    pub fn builder(api_key: impl Into<String>) -> PaymenticClientBuilder {
        PaymenticClientBuilder {
            api_key: api_key.into(),
            environment: Environment::default(),
            base_url: None,
            http: None,
        }
    }

    /// Build a client from validated SDK settings.
    pub fn from_config(config: &PaymenticConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::builder(config.api_key.clone())
            .with_environment(config.environment())
            .build())
    }

    pub fn payment(&self) -> &PaymentClient {
        &self.payment
    }
}

/// Services of the payment module.
#[derive(Clone)]
pub struct PaymentClient {
    transactions: TransactionService,
    refunds: RefundService,
    blik: BlikService,
    points: PointService,
}

impl PaymentClient {
    pub fn transactions(&self) -> &TransactionService {
        &self.transactions
    }

    pub fn refunds(&self) -> &RefundService {
        &self.refunds
    }

    pub fn blik(&self) -> &BlikService {
        &self.blik
    }

    pub fn points(&self) -> &PointService {
        &self.points
    }
}
