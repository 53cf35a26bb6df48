// src/client/session.rs
use std::fmt;

use uuid::Uuid;

pub const GREETING: &str = "Type something";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Client-side state of one dialog: its id and the ordered transcript.
///
/// Nothing here is sent to the server except the dialog id and the latest
/// user message.
#[derive(Clone, Debug)]
pub struct ChatSession {
    dialog_id: Uuid,
    transcript: Vec<Turn>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            dialog_id: Uuid::new_v4(),
            transcript: vec![Turn { role: Role::Assistant, content: GREETING.to_string() }],
        }
    }

    pub fn dialog_id(&self) -> Uuid {
        self.dialog_id
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Append a turn and return the transcript length.
    pub fn push(&mut self, role: Role, content: impl Into<String>) -> usize {
        self.transcript.push(Turn { role, content: content.into() });
        self.transcript.len()
    }

    /// Most recent user message, if the user has said anything yet.
    pub fn last_user_message(&self) -> Option<&str> {
        self.transcript
            .iter()
            .rev()
            .find(|t| t.role == Role::User)
            .map(|t| t.content.as_str())
    }

    /// Start over: fresh dialog id, transcript back to the greeting.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
