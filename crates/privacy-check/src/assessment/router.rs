use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use super::domain::AnswerSet;
use super::service::{AssessmentError, AssessmentService};

/// Router builder exposing the questionnaire, scoring, results hand-off, and
/// report export endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/assessment/score", post(score_handler))
        .route("/api/v1/assessment/result", get(result_handler))
        .route("/api/v1/assessment/report", post(report_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: AnswerSet,
}

/// Query parameters carried by the results hand-off. `answers` arrives as a
/// JSON object serialized into the query string.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultQuery {
    pub(crate) score: Option<u32>,
    pub(crate) total: Option<u32>,
    pub(crate) answers: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportRequest {
    pub(crate) score: Option<u32>,
    pub(crate) total: Option<u32>,
    #[serde(default)]
    pub(crate) answers: AnswerSet,
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<AssessmentService>>,
) -> impl IntoResponse {
    Json(service.catalog().questions().to_vec())
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(request): Json<ScoreRequest>,
) -> Response {
    match service.score(&request.answers) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(err @ AssessmentError::Incomplete { .. }) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn result_handler(
    State(service): State<Arc<AssessmentService>>,
    Query(query): Query<ResultQuery>,
) -> Response {
    let answers = parse_answers_param(query.answers.as_deref());
    let outcome = service.resolve_handoff(query.score, query.total, &answers);
    (StatusCode::OK, Json(outcome)).into_response()
}

pub(crate) async fn report_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(request): Json<ReportRequest>,
) -> Response {
    let outcome = service.resolve_handoff(request.score, request.total, &request.answers);
    let generated_on = Local::now().date_naive();
    let report = service.build_report(&request.answers, &outcome, generated_on);

    match report.to_pdf_bytes() {
        Ok(bytes) => {
            let disposition = format!("attachment; filename=\"{}\"", report.filename());
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            error!(?err, "report rendering failed");
            let payload = json!({ "error": format!("Failed to generate PDF report: {err}") });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

/// The results view must render even when the hand-off is damaged: a missing
/// or malformed `answers` parameter degrades to an empty answer set.
pub(crate) fn parse_answers_param(raw: Option<&str>) -> AnswerSet {
    match raw {
        None => AnswerSet::default(),
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
            warn!(%err, "discarding malformed answers parameter");
            AnswerSet::default()
        }),
    }
}
