use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/editions
pub async fn list_editions(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let product = state.product().await?;
    let editions = product.query().editions();
    let count = editions.len();
    Ok(Json(json!({ "data": editions, "count": count })))
}
