//! Generic HTTP transport for the notebook API.
//!
//! This module provides the request utility the operation modules are built
//! on: a thin wrapper around a reqwest client bound to a backend base URL,
//! exposing JSON-decoding `get`/`post` primitives. Serialization, transport,
//! and error mapping live here; the operation modules only describe endpoint
//! shapes.

pub mod cancellation;
pub mod config;
pub mod error;

pub use cancellation::CancellableRequest;
pub use config::ClientConfig;
pub use error::ApiError;

use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// HTTP client for the notebook backend.
///
/// Cheap to clone; clones share the same connection pool. All requests are
/// issued against endpoint paths joined onto the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the configured base URL cannot be
    /// parsed, or [`ApiError::Network`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    /// Creates a client for the given base URL with default settings.
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins an endpoint path onto the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    /// Issues a GET request with serde-serialized query parameters and
    /// decodes the JSON response body.
    ///
    /// `Option` fields serialized as `None` are omitted from the query
    /// string entirely.
    pub async fn get_json<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);
        let response = self.http.get(url).query(query).send().await?;
        trace!("GET {} -> {}", path, response.status());
        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// Issues a POST request with a form-encoded body and decodes the JSON
    /// response body.
    pub async fn post_form<B, T>(&self, path: &str, form: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);
        let response = self.http.post(url).form(form).send().await?;
        trace!("POST {} -> {}", path, response.status());
        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}
