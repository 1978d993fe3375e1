use crate::state::AppState;
use axum::{extract::State, Json};
use frameforge_core::hardware::{Cpu, Game, Gpu};
use std::sync::Arc;

pub async fn list_cpus(State(state): State<Arc<AppState>>) -> Json<Vec<Cpu>> {
    Json(state.catalog().cpus.all().to_vec())
}

pub async fn list_gpus(State(state): State<Arc<AppState>>) -> Json<Vec<Gpu>> {
    Json(state.catalog().gpus.all().to_vec())
}

pub async fn list_games(State(state): State<Arc<AppState>>) -> Json<Vec<Game>> {
    Json(state.catalog().games.all().to_vec())
}
