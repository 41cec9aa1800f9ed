use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/product
///
/// Returns the whole product document.
pub async fn get_product(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let product = state.product().await?;
    Ok(Json(json!({ "data": product })))
}
