use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListFeaturesParams {
    pub edition: Option<String>,
    pub active: Option<bool>,
}

/// GET /api/features?edition=ed-pro&active=true
///
/// List features, optionally limited to one edition and/or by active flag.
pub async fn list_features(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListFeaturesParams>,
) -> Result<Json<Value>, AppError> {
    let product = state.product().await?;
    let q = product.query();

    let mut features = match params.edition.as_deref() {
        Some(edition) => q.features_for_edition(edition),
        None => q.features().iter().collect(),
    };
    if let Some(active) = params.active {
        features.retain(|f| f.active == active);
    }

    let count = features.len();
    Ok(Json(json!({ "data": features, "count": count })))
}

/// GET /api/features/{id}
///
/// A single feature plus the editions it resolves to.
pub async fn get_feature(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let product = state.product().await?;
    let q = product.query();

    match q.feature(&id) {
        Some(feature) => Ok(Json(json!({
            "data": feature,
            "editions": q.editions_for_feature(&id),
        }))),
        None => Err(AppError::FeatureNotFound(id)),
    }
}
