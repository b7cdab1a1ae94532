//! Bridge to the external legal-guidance chat-completion service.
//!
//! [`GuidanceService`] owns the two entry points (free-form conversation and
//! per-question remediation feedback) on top of a [`ChatCompletionBackend`]
//! seam, so tests and alternative providers swap in without touching the
//! routing or prompt logic. Calls are fire-once: no retry, no backoff.

mod client;
mod prompts;
mod router;
mod service;

use serde::{Deserialize, Serialize};

pub use client::{ChatCompletionBackend, CompletionRequest, GroqChatClient};
pub use router::guidance_router;
pub use service::{
    AssistantReply, GuidanceService, RemediationFeedback, FALLBACK_ASSISTANT_MESSAGE,
    NO_FEEDBACK_PLACEHOLDER,
};

/// Speaker of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message in a conversation, as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Failures raised by the guidance adapter. Input rejections happen before
/// any network call; the rest wrap the upstream exchange.
#[derive(Debug, thiserror::Error)]
pub enum GuidanceError {
    #[error("message is required and must not be empty")]
    EmptyMessage,
    #[error("question id and question text are required")]
    MissingQuestionFields,
    #[error("guidance API key not configured")]
    MissingCredential,
    #[error("chat completion request failed")]
    Transport(#[from] reqwest::Error),
    #[error("chat completion service returned status {0}")]
    UpstreamStatus(u16),
    #[error("chat completion reply contained no generated text")]
    EmptyCompletion,
}

impl GuidanceError {
    /// True for errors caused by the caller's input rather than the upstream
    /// exchange; these map to 4xx responses.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            GuidanceError::EmptyMessage | GuidanceError::MissingQuestionFields
        )
    }
}
