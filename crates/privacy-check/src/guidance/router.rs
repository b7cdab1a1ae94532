use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::client::ChatCompletionBackend;
use super::service::GuidanceService;
use super::{ChatTurn, GuidanceError};

/// Router builder exposing the conversational and remediation endpoints.
pub fn guidance_router<B>(service: Arc<GuidanceService<B>>) -> Router
where
    B: ChatCompletionBackend + 'static,
{
    Router::new()
        .route("/api/v1/chat", post(chat_handler::<B>))
        .route("/api/v1/feedback", post(feedback_handler::<B>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    /// Defaulted so an absent field takes the empty-message rejection path
    /// instead of a deserialization error.
    #[serde(default)]
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse {
    pub(crate) message: String,
    pub(crate) timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeedbackRequest {
    #[serde(default)]
    pub(crate) question_id: String,
    #[serde(default)]
    pub(crate) question_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeedbackResponse {
    pub(crate) feedback: String,
    pub(crate) question_id: String,
}

pub(crate) async fn chat_handler<B>(
    State(service): State<Arc<GuidanceService<B>>>,
    Json(request): Json<ChatRequest>,
) -> Response
where
    B: ChatCompletionBackend + 'static,
{
    match service.converse(&request.message, &request.history).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatResponse {
                message: reply.message,
                timestamp: reply.timestamp,
            }),
        )
            .into_response(),
        Err(err) => failure_response(err, FailureText::Chat),
    }
}

pub(crate) async fn feedback_handler<B>(
    State(service): State<Arc<GuidanceService<B>>>,
    Json(request): Json<FeedbackRequest>,
) -> Response
where
    B: ChatCompletionBackend + 'static,
{
    match service
        .remediation(&request.question_id, &request.question_text)
        .await
    {
        Ok(feedback) => (
            StatusCode::OK,
            Json(FeedbackResponse {
                feedback: feedback.feedback,
                question_id: feedback.question_id,
            }),
        )
            .into_response(),
        Err(err) => failure_response(err, FailureText::Feedback),
    }
}

/// Which endpoint's user-facing wording to apply.
#[derive(Clone, Copy)]
enum FailureText {
    Chat,
    Feedback,
}

/// Map adapter errors onto the response contract. Upstream diagnostic detail
/// never reaches the caller; it is logged at the client layer and here.
fn failure_response(err: GuidanceError, text: FailureText) -> Response {
    let (status, message) = match (&err, text) {
        (GuidanceError::EmptyMessage, _) => (
            StatusCode::BAD_REQUEST,
            "Message is required and must not be empty",
        ),
        (GuidanceError::MissingQuestionFields, _) => {
            (StatusCode::BAD_REQUEST, "Question ID and text are required")
        }
        (GuidanceError::MissingCredential, _) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Guidance API key not configured",
        ),
        (
            GuidanceError::Transport(_) | GuidanceError::UpstreamStatus(_),
            FailureText::Chat,
        ) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to get response from AI service",
        ),
        (
            GuidanceError::Transport(_) | GuidanceError::UpstreamStatus(_),
            FailureText::Feedback,
        ) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate feedback",
        ),
        (GuidanceError::EmptyCompletion, FailureText::Chat) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "No response from AI service",
        ),
        (GuidanceError::EmptyCompletion, FailureText::Feedback) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "No feedback generated")
        }
    };

    if status.is_server_error() {
        error!(?err, "guidance request failed");
    }

    (status, Json(json!({ "error": message }))).into_response()
}
