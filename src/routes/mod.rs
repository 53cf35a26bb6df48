// src/routes/mod.rs
pub mod dialog;
pub mod extract;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use dialog::{get_message_handler, predict_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/get_message", post(get_message_handler))
        .route("/predict", post(predict_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
