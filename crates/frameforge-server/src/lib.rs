pub mod error;
pub mod routes;
pub mod state;

use crate::error::AppError;
use crate::state::AppState;
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!("💥 Handler panicked: {}", detail);
    AppError::Any(anyhow::anyhow!("handler panicked")).into_response()
}

/// The full application with its middleware stack.
pub fn build_router(state: Arc<AppState>) -> Router {
    routes::system_routes()
        .merge(routes::predict_routes())
        .merge(routes::catalog_routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
