//! Async client for the product document.
//!
//! Every call issues exactly one `GET {base_url}/baremetrics.json`. Nothing is
//! cached between calls and nothing is retried; wrap calls in
//! `tokio::time::timeout` if a deadline is needed.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, ErrorPolicy};
use crate::error::Result;
use crate::models::Product;

// ---------------------------------------------------------------------------
// BaremetricsClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BaremetricsClient`].
///
/// Use [`BaremetricsClient::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](BaremetricsClientBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct BaremetricsClientBuilder {
    config: ClientConfig,
}

impl BaremetricsClientBuilder {
    /// Set the origin the document path is resolved against.
    ///
    /// Defaults to the compile-time `BAREMETRICS_API_URL` or
    /// [`DEFAULT_API_URL`](crate::config::DEFAULT_API_URL).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = ClientConfig::new(base_url, self.config.on_error());
        self
    }

    /// Choose how fetch failures are reported. Defaults to
    /// [`ErrorPolicy::Propagate`].
    pub fn on_error(mut self, policy: ErrorPolicy) -> Self {
        self.config = ClientConfig::new(self.config.base_url(), policy);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<BaremetricsClient> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(BaremetricsClient {
            http,
            config: Arc::new(self.config),
        })
    }
}

// ---------------------------------------------------------------------------
// BaremetricsClient
// ---------------------------------------------------------------------------

/// Fetches and type-checks the product document.
///
/// Cheap to clone; clones share the HTTP connection pool and the immutable
/// configuration.
#[derive(Debug, Clone)]
pub struct BaremetricsClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl BaremetricsClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> BaremetricsClientBuilder {
        BaremetricsClientBuilder::default()
    }

    /// Client with the compile-time base URL and the propagate policy.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Client whose base URL comes from `BAREMETRICS_API_URL` at run time.
    pub fn from_env() -> Result<Self> {
        Self::builder().config(ClientConfig::from_env()).build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the product document.
    ///
    /// Returns `Ok(Some(product))` on success. On failure the configured
    /// [`ErrorPolicy`] decides: `Propagate` returns the error, while
    /// `SuppressAndLog` emits one error-level event and returns `Ok(None)`.
    pub async fn get_baremetrics(&self) -> Result<Option<Product>> {
        let result = self.fetch::<Product>().await;
        settle(&self.config, result)
    }

    /// Fetch the document as untyped JSON, skipping the shape check.
    pub async fn get_baremetrics_json(&self) -> Result<Option<serde_json::Value>> {
        let result = self.fetch::<serde_json::Value>().await;
        settle(&self.config, result)
    }

    async fn fetch<T: DeserializeOwned>(&self) -> Result<T> {
        let url = self.config.product_url();
        tracing::debug!(url = %url, "fetching product document");
        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl fmt::Display for BaremetricsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BaremetricsClient(base_url={}, on_error={})",
            self.config.base_url(),
            self.config.on_error()
        )
    }
}

/// Apply the error policy to the outcome of one fetch.
pub(crate) fn settle<T>(config: &ClientConfig, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => match config.on_error() {
            ErrorPolicy::Propagate => Err(e),
            ErrorPolicy::SuppressAndLog => {
                tracing::error!(
                    url = %config.product_url(),
                    error = %e,
                    "Failed to fetch product document"
                );
                Ok(None)
            }
        },
    }
}
