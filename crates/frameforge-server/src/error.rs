use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use frameforge_core::api::PredictError;
use frameforge_core::prediction::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Predict(#[from] PredictError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    Any(#[from] anyhow::Error),
}

const COMPUTE_FAILED: &str = "Failed to compute prediction";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Predict(e @ PredictError::NotFound { .. }) => {
                tracing::debug!("Rejected prediction: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid CPU, GPU, or game selection".to_string(),
                )
            }
            AppError::Predict(e @ PredictError::MissingBaselineGpu { .. }) => {
                tracing::error!("Prediction Error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Baseline GPU not found for this game".to_string(),
                )
            }
            AppError::Predict(e) => {
                tracing::error!("Prediction Error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, COMPUTE_FAILED.to_string())
            }
            AppError::BadRequest(s) => (StatusCode::BAD_REQUEST, s),
            AppError::Any(e) => {
                tracing::error!("Internal Error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, COMPUTE_FAILED.to_string())
            }
        };

        (status, Json(ErrorResponse { error: msg })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
