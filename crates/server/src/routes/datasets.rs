use std::sync::Arc;

use axum::{Extension, Json};
use serde_json::{json, Value as JsonValue};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/datasets
pub async fn get_datasets(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<JsonValue>, AppError> {
    Ok(Json(json!({ "datasets": &state.datasets })))
}
