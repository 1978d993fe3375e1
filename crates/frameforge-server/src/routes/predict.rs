use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use frameforge_core::prediction::{PredictRequest, PredictResponse};
use std::sync::Arc;
use tracing::debug;

pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    debug!(
        "POST /api/predict cpu={} gpu={} game={} ram={}",
        request.cpu_id,
        request.gpu_id,
        request.game_id,
        request.memory().label()
    );

    let response = state.predictor.predict(&request)?;
    Ok(Json(response))
}
