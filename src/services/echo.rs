// src/services/echo.rs
use crate::message::{EchoRequest, EchoResponse};

/// Returns the received text unchanged, tagged with its dialog.
pub fn echo(request: EchoRequest) -> EchoResponse {
    let last_message_id = request
        .last_message_id
        .map_or_else(|| "None".to_string(), |id| id.to_string());
    tracing::info!(
        dialog_id = %request.dialog_id,
        last_message_id = %last_message_id,
        "received message"
    );

    EchoResponse {
        new_msg_text: request.last_msg_text,
        dialog_id: request.dialog_id,
    }
}
