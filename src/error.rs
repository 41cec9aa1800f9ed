#[derive(Debug, thiserror::Error)]
pub enum BaremetricsError {
    /// Connection, DNS, transport or non-success status failures.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the product document shape.
    #[error("Invalid product document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, BaremetricsError>;
