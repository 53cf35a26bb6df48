// src/services/scorer.rs
use rand::Rng;

use crate::message::Message;

/// Source of the bot probability attached to a [`Prediction`](crate::message::Prediction).
///
/// Implementations must return a value in `[0, 1)`.
pub trait ScoreProvider: Send + Sync {
    fn score(&self, message: &Message) -> f64;
}

/// Stand-in scorer: samples uniformly from `[0, 1)` and ignores the message.
///
/// There is no model behind it and no history lookup, so two calls with the
/// same message give unrelated scores.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomScore;

impl ScoreProvider for RandomScore {
    fn score(&self, _message: &Message) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}
