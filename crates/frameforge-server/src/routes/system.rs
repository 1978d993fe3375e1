use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub message: String,
}

pub async fn root() -> &'static str {
    "FrameForge Prediction API v0.1"
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let catalog = state.catalog();
    Json(StatusResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: format!(
            "{} CPUs, {} GPUs, {} games, {} baselines",
            catalog.cpus.len(),
            catalog.gpus.len(),
            catalog.games.len(),
            catalog.baselines.len()
        ),
    })
}
