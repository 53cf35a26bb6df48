// src/lib.rs
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Router with state and layers attached, ready for `axum::serve`.
pub fn build_app(state: AppState) -> Router {
    routes::create_router()
        .with_state(Arc::new(state))
        .layer(CorsLayer::very_permissive())
}
