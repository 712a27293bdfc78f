//! Structured replies to slash commands.

use serde::{Deserialize, Serialize};

/// Reply to the user who issued a command.
///
/// Precondition failures (no active game, admins only, ...) are `Error`
/// values, never Rust errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameResponse {
    Response { body: ResponseBody },
    Error { text: String },
}

impl GameResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Response {
            body: ResponseBody::Text(text.into()),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error { text: text.into() }
    }

    pub fn confirmation(prompt: ConfirmationPrompt) -> Self {
        Self::Response {
            body: ResponseBody::Confirmation(prompt),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Plain text of the reply, when it has one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Response {
                body: ResponseBody::Text(text),
            } => Some(text),
            Self::Error { text } => Some(text),
            Self::Response { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseBody {
    Text(String),
    Confirmation(ConfirmationPrompt),
}

/// A yes/no question with the action ids the two buttons send back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationPrompt {
    pub question: String,
    pub confirm_label: String,
    pub confirm_action: String,
    pub cancel_label: String,
    pub cancel_action: String,
}
