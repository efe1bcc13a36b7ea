use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use persistence::StoreError;
use serde_json::json;
use thiserror::Error;
use types::errors::ValidationError;

/// Central error type for the gateway
///
/// Every variant renders as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn branch_not_found() -> Self {
        AppError::NotFound("Branch not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(err) => err.to_string(),
            AppError::Store(err) => {
                // Store details stay in the logs
                tracing::error!(error = %err, "Store failure while serving request");
                if status == StatusCode::SERVICE_UNAVAILABLE {
                    "Service unavailable".to_string()
                } else {
                    "Internal server error".to_string()
                }
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
