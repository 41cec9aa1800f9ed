//! Synchronous mirror of [`crate::client`] built on `reqwest::blocking`.
//!
//! Do not construct or call this client from inside an async runtime; use
//! [`crate::BaremetricsClient`] there instead.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::client::settle;
use crate::config::{ClientConfig, ErrorPolicy};
use crate::error::Result;
use crate::models::Product;

/// Builder for a blocking [`BaremetricsClient`].
#[derive(Debug, Clone, Default)]
pub struct BaremetricsClientBuilder {
    config: ClientConfig,
}

impl BaremetricsClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = ClientConfig::new(base_url, self.config.on_error());
        self
    }

    pub fn on_error(mut self, policy: ErrorPolicy) -> Self {
        self.config = ClientConfig::new(self.config.base_url(), policy);
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<BaremetricsClient> {
        let http = reqwest::blocking::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(BaremetricsClient {
            http,
            config: self.config,
        })
    }
}

/// Blocking product-document client.
#[derive(Debug, Clone)]
pub struct BaremetricsClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl BaremetricsClient {
    pub fn builder() -> BaremetricsClientBuilder {
        BaremetricsClientBuilder::default()
    }

    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn from_env() -> Result<Self> {
        Self::builder().config(ClientConfig::from_env()).build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the product document, honoring the configured [`ErrorPolicy`].
    pub fn get_baremetrics(&self) -> Result<Option<Product>> {
        let result = self.fetch::<Product>();
        settle(&self.config, result)
    }

    pub fn get_baremetrics_json(&self) -> Result<Option<serde_json::Value>> {
        let result = self.fetch::<serde_json::Value>();
        settle(&self.config, result)
    }

    fn fetch<T: DeserializeOwned>(&self) -> Result<T> {
        let url = self.config.product_url();
        tracing::debug!(url = %url, "fetching product document");
        let resp = self.http.get(&url).send()?.error_for_status()?;
        let bytes = resp.bytes()?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl fmt::Display for BaremetricsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BaremetricsClient(base_url={}, on_error={}, blocking)",
            self.config.base_url(),
            self.config.on_error()
        )
    }
}
