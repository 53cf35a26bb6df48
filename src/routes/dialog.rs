// src/routes/dialog.rs
use axum::{Json, extract::State};

use super::extract::Validated;
use crate::{
    message::{EchoRequestBody, EchoResponse, MessageBody, Prediction},
    services::{echo::echo, prediction::predict},
    state::SharedState,
};

pub async fn get_message_handler(
    Validated(request): Validated<EchoRequestBody>,
) -> Json<EchoResponse> {
    Json(echo(request))
}

pub async fn predict_handler(
    State(state): State<SharedState>,
    Validated(message): Validated<MessageBody>,
) -> Json<Prediction> {
    Json(predict(state.scorer.as_ref(), &message))
}
