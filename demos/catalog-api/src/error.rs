use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use baremetrics_sdk::BaremetricsError;
use serde_json::json;

/// Failures a catalog route can report. Rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum AppError {
    /// Upstream fetch failed under the propagate policy.
    Upstream(BaremetricsError),
    /// Upstream fetch failed and the client suppressed it.
    Unavailable,
    FeatureNotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upstream(BaremetricsError::InvalidArgument(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Upstream(_) | AppError::Unavailable => StatusCode::BAD_GATEWAY,
            AppError::FeatureNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::Upstream(e) => e.to_string(),
            AppError::Unavailable => "Product document unavailable".to_string(),
            AppError::FeatureNotFound(id) => format!("Feature '{id}' not found"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<BaremetricsError> for AppError {
    fn from(e: BaremetricsError) -> Self {
        tracing::warn!(error = %e, "upstream fetch failed");
        AppError::Upstream(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_kind() {
        let invalid: BaremetricsError = serde_json::from_str::<bool>("\"yes\"").unwrap_err().into();
        assert_eq!(AppError::from(invalid).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::Unavailable.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            AppError::Upstream(BaremetricsError::InvalidArgument("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::FeatureNotFound("feat-x".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn response_carries_status_and_message() {
        let err = AppError::FeatureNotFound("feat-x".into());
        assert_eq!(err.message(), "Feature 'feat-x' not found");
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
