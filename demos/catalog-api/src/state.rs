use baremetrics_sdk::{BaremetricsClient, Product};

use crate::error::AppError;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    pub client: BaremetricsClient,
}

impl AppState {
    /// Fetch the document for one request. Each handler call triggers a fresh
    /// upstream fetch.
    pub async fn product(&self) -> Result<Product, AppError> {
        self.client
            .get_baremetrics()
            .await?
            .ok_or(AppError::Unavailable)
    }
}
