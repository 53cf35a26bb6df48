// src/services/prediction.rs
use uuid::Uuid;

use super::scorer::ScoreProvider;
use crate::message::{Message, Prediction};

/// Scores a message and wraps the result under a fresh prediction id.
pub fn predict(scorer: &dyn ScoreProvider, message: &Message) -> Prediction {
    let prediction = Prediction {
        id: Uuid::new_v4(),
        message_id: message.id,
        dialog_id: message.dialog_id,
        participant_index: message.participant_index,
        is_bot_probability: scorer.score(message),
    };

    tracing::debug!(
        prediction_id = %prediction.id,
        message_id = %prediction.message_id,
        dialog_id = %prediction.dialog_id,
        is_bot_probability = prediction.is_bot_probability,
        "scored message"
    );

    prediction
}
