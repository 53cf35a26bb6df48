// src/state.rs
use std::sync::Arc;

use crate::services::scorer::{RandomScore, ScoreProvider};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub scorer: Arc<dyn ScoreProvider>,
}

impl AppState {
    pub fn new(scorer: impl ScoreProvider + 'static) -> Self {
        Self { scorer: Arc::new(scorer) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RandomScore)
    }
}
