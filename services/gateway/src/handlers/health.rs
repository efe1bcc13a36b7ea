use crate::error::AppError;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};

pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.service.health().await?;
    Ok(Json(json!({ "status": "ok" })))
}
