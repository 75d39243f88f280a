use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// GET /cv
/// Returns the CV document exactly as stored on disk.
pub async fn handle_get_cv(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let document = state.store.load().await?;
    info!("Served CV document from {}", state.store.path().display());
    Ok(Json(document))
}
