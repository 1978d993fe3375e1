pub mod catalog;
pub mod predict;
pub mod system;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", axum::routing::get(system::root))
        .route("/health", axum::routing::get(system::health))
}

pub fn predict_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/predict", axum::routing::post(predict::predict))
}

pub fn catalog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/cpus", axum::routing::get(catalog::list_cpus))
        .route("/api/gpus", axum::routing::get(catalog::list_gpus))
        .route("/api/games", axum::routing::get(catalog::list_games))
}
