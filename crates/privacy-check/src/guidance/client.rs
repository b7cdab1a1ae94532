use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::{ChatTurn, GuidanceError};
use crate::config::GuidanceConfig;

/// Low randomness keeps the legal guidance consistent and conservative.
const TEMPERATURE: f32 = 0.3;
const TOP_P: f32 = 0.9;

/// Provider-agnostic completion request: the backend supplies model and
/// sampling parameters, callers supply the conversation and length cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatTurn>,
    pub max_tokens: u32,
}

/// Seam to the external chat-completion provider. The production
/// implementation is [`GroqChatClient`]; tests substitute stubs.
#[async_trait]
pub trait ChatCompletionBackend: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GuidanceError>;
}

/// Client for the hosted OpenAI-compatible chat-completion endpoint.
pub struct GroqChatClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
    model: String,
}

impl GroqChatClient {
    /// Build the client. The upstream gives no latency guarantee, so every
    /// request carries the configured client-side timeout.
    pub fn new(config: &GuidanceConfig) -> Result<Self, GuidanceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
struct CompletionPayload<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl ChatCompletionBackend for GroqChatClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GuidanceError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GuidanceError::MissingCredential);
        };

        let payload = CompletionPayload {
            model: &self.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            stream: false,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Upstream detail is operator-only; callers get a typed error.
            let detail = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                %detail,
                "chat completion upstream rejected request"
            );
            return Err(GuidanceError::UpstreamStatus(status.as_u16()));
        }

        let reply: CompletionReply = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(GuidanceError::EmptyCompletion)
    }
}
