// src/client/mod.rs
pub mod command;
pub mod session;

use reqwest::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::message::{EchoRequest, EchoResponse, Message, Prediction};
use session::{ChatSession, Role};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("nothing to send, the transcript has no user message")]
    NothingToSend,
}

/// Typed HTTP client for the echo bot endpoints.
#[derive(Clone, Debug)]
pub struct EchoClient {
    http: reqwest::Client,
    base_url: String,
}

impl EchoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_message(&self, request: &EchoRequest) -> Result<EchoResponse, ClientError> {
        self.post("/get_message", request).await
    }

    pub async fn predict(&self, message: &Message) -> Result<Prediction, ClientError> {
        self.post("/predict", message).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(response.json::<T>().await?)
    }

    /// Send the session's latest user message and record the reply.
    ///
    /// On failure the transcript keeps the user turn and gets no reply.
    pub async fn send_turn(&self, session: &mut ChatSession) -> Result<String, ClientError> {
        let text = session
            .last_user_message()
            .ok_or(ClientError::NothingToSend)?
            .to_string();

        let request = EchoRequest {
            dialog_id: session.dialog_id(),
            last_msg_text: text,
            last_message_id: Some(Uuid::new_v4()),
        };
        tracing::debug!(dialog_id = %request.dialog_id, "sending turn");

        let response = self.get_message(&request).await?;
        session.push(Role::Assistant, response.new_msg_text.clone());
        Ok(response.new_msg_text)
    }
}
