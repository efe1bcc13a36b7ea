use crate::error::AppError;
use crate::models::{BankOut, ListBranchesParams, PaginatedBranches};
use crate::state::AppState;
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use types::errors::ValidationError;
use types::page::{BranchFilter, Pagination};

pub async fn list_banks(State(state): State<AppState>) -> Result<Json<Vec<BankOut>>, AppError> {
    let banks = state.service.list_banks().await?;
    Ok(Json(banks.into_iter().map(BankOut::from).collect()))
}

pub async fn list_bank_branches(
    State(state): State<AppState>,
    bank_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<ListBranchesParams>, QueryRejection>,
) -> Result<Json<PaginatedBranches>, AppError> {
    // Malformed input is a validation failure, same as an out-of-range limit
    let Path(bank_id) = bank_id
        .map_err(|e| ValidationError::invalid_parameter("bank_id", e.body_text()))?;
    let Query(params) = params
        .map_err(|e| ValidationError::invalid_parameter("query", e.body_text()))?;

    let page = Pagination::from_params(params.limit, params.offset)?;
    let filter = BranchFilter::for_bank(bank_id).with_city(params.city);

    let result = state.service.list_branches(&filter, page).await?;
    Ok(Json(result.into()))
}
