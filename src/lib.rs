//! Baremetrics SDK for Rust.
//!
//! Fetches the static `baremetrics.json` document that describes a product,
//! its editions and its features, and exposes it as typed, read-only values.
//! The document is checked against the model on arrival: a body whose shape
//! diverges fails with [`BaremetricsError::InvalidDocument`].
//!
//! # Quick start
//!
//! ```no_run
//! use baremetrics_sdk::{BaremetricsClient, ErrorPolicy};
//!
//! # async fn example() -> baremetrics_sdk::Result<()> {
//! let client = BaremetricsClient::builder()
//!     .base_url("https://example.test")
//!     .on_error(ErrorPolicy::Propagate)
//!     .build()?;
//!
//! if let Some(product) = client.get_baremetrics().await? {
//!     for feature in product.query().features_for_edition("pro") {
//!         println!("{}", feature.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;

pub use client::{BaremetricsClient, BaremetricsClientBuilder};
pub use config::{ClientConfig, ErrorPolicy};
pub use error::{BaremetricsError, Result};
pub use models::{
    CaptureFlag, DisplayMode, Edition, EditionRef, Feature, FeatureEdition, ItemList, Product,
    Screenshot,
};
pub use queries::ProductQuery;
