use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::AppState;

/// Run one lifecycle pass on demand; the periodic loop stays authoritative.
/// Safe to race with it, since promotion is idempotent under the per-match locks.
pub async fn tick(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let promoted = state.scheduler.tick().await?;
    Ok(Json(json!({ "promoted": promoted })))
}
