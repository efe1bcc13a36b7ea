use crate::error::AppError;
use crate::models::BranchOut;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};

pub async fn get_branch(
    State(state): State<AppState>,
    Path(ifsc): Path<String>,
) -> Result<Json<BranchOut>, AppError> {
    let record = state
        .service
        .get_branch(&ifsc)
        .await?
        .ok_or_else(AppError::branch_not_found)?;

    Ok(Json(record.into()))
}
