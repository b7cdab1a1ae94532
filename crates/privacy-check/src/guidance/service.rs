use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::client::{ChatCompletionBackend, CompletionRequest};
use super::prompts;
use super::{ChatRole, ChatTurn, GuidanceError};

/// Prior turns forwarded with a conversational request; older turns are
/// silently dropped, no summarization.
const HISTORY_WINDOW: usize = 10;
const CONVERSATION_MAX_TOKENS: u32 = 1000;
const REMEDIATION_MAX_TOKENS: u32 = 200;

/// Shown in the chat transcript in place of a failed assistant reply.
pub const FALLBACK_ASSISTANT_MESSAGE: &str = "I apologize, but I'm experiencing technical difficulties. Please try again in a moment. For urgent legal questions, consider consulting with a qualified data privacy lawyer.";

/// Rendered by results surfaces when per-question feedback is unavailable.
pub const NO_FEEDBACK_PLACEHOLDER: &str = "Unable to generate specific feedback for this question. Please consult the action steps above or contact our AI assistant for guidance.";

/// The two guidance entry points over a chat-completion backend.
pub struct GuidanceService<B> {
    backend: Arc<B>,
}

/// A successful conversational reply.
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Generated feedback for one failed question, keyed by its id so concurrent
/// lookups can land in any order.
#[derive(Debug, Clone)]
pub struct RemediationFeedback {
    pub question_id: String,
    pub feedback: String,
}

impl<B: ChatCompletionBackend> GuidanceService<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Free-form conversational guidance.
    ///
    /// The fixed system prompt is always prepended; caller-supplied `system`
    /// turns are discarded so the persona cannot be replaced. History is
    /// bounded to the last [`HISTORY_WINDOW`] turns.
    pub async fn converse(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<AssistantReply, GuidanceError> {
        if message.trim().is_empty() {
            return Err(GuidanceError::EmptyMessage);
        }

        let recent: Vec<ChatTurn> = history
            .iter()
            .filter(|turn| turn.role != ChatRole::System)
            .cloned()
            .collect();
        let start = recent.len().saturating_sub(HISTORY_WINDOW);

        let mut messages = Vec::with_capacity(recent.len() - start + 2);
        messages.push(ChatTurn::system(prompts::CONVERSATION_SYSTEM_PROMPT));
        messages.extend(recent.into_iter().skip(start));
        messages.push(ChatTurn::user(message));

        let text = self
            .backend
            .complete(CompletionRequest {
                messages,
                max_tokens: CONVERSATION_MAX_TOKENS,
            })
            .await?;
        let message = non_empty(text)?;

        Ok(AssistantReply {
            message,
            timestamp: Utc::now(),
        })
    }

    /// Targeted 2-3 sentence guidance for a single failed question.
    pub async fn remediation(
        &self,
        question_id: &str,
        question_text: &str,
    ) -> Result<RemediationFeedback, GuidanceError> {
        if question_id.trim().is_empty() || question_text.trim().is_empty() {
            return Err(GuidanceError::MissingQuestionFields);
        }

        let topic = prompts::topic_phrase(question_id);
        let messages = vec![
            ChatTurn::system(prompts::REMEDIATION_SYSTEM_PROMPT),
            ChatTurn::user(prompts::remediation_prompt(question_text, topic)),
        ];

        let text = self
            .backend
            .complete(CompletionRequest {
                messages,
                max_tokens: REMEDIATION_MAX_TOKENS,
            })
            .await?;
        let feedback = non_empty(text)?;

        Ok(RemediationFeedback {
            question_id: question_id.to_string(),
            feedback,
        })
    }
}

/// A successful transport exchange that produced no usable text is still a
/// failure, distinct from a successful reply.
fn non_empty(text: String) -> Result<String, GuidanceError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GuidanceError::EmptyCompletion);
    }
    Ok(trimmed.to_string())
}
