//! Inbound HTTP surface.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub mod health;
pub mod quotes;

/// Assemble the full API router.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", quotes::router().merge(health::router()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
