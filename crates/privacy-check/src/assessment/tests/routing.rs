use super::common::*;
use crate::assessment::{assessment_router, AssessmentService};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn build_router() -> axum::Router {
    assessment_router(Arc::new(AssessmentService::standard()))
}

#[tokio::test]
async fn get_questions_returns_the_catalog() {
    let response = build_router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/questions")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    let questions = payload.as_array().expect("array of questions");
    assert_eq!(questions.len(), 10);
    assert_eq!(
        questions[0].get("id").and_then(Value::as_str),
        Some("data_protection_officer")
    );
    assert!(questions[0].get("prompt").is_some());
    assert!(questions[0].get("help").is_some());
}

#[tokio::test]
async fn post_score_returns_result_and_plan() {
    let answers = answers_with_no(&["privacy_notice", "breach_notification"]);
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/assessment/score")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({ "answers": answers })).expect("serialize"),
        ))
        .expect("request");

    let response = build_router()
        .oneshot(request)
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(payload["result"]["score"], json!(8));
    assert_eq!(payload["result"]["tier"], json!("compliant"));
    let steps = payload["action_steps"].as_array().expect("steps array");
    assert!(!steps.is_empty() && steps.len() <= 3);
}

#[tokio::test]
async fn post_score_rejects_incomplete_submission() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/assessment/score")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({ "answers": { "explicit_consent": true } }))
                .expect("serialize"),
        ))
        .expect("request");

    let response = build_router()
        .oneshot(request)
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(response.into_body(), 1024).await.expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("incomplete"));
}

#[tokio::test]
async fn get_result_tolerates_malformed_answers_param() {
    let response = build_router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/assessment/result?answers=not-json")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(payload["result"]["score"], json!(0));
    assert_eq!(payload["result"]["tier"], json!("non-compliant"));
    let steps = payload["action_steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 1);
    assert_eq!(
        steps[0]["title"],
        json!("Seek Professional Legal Consultation")
    );
}

#[tokio::test]
async fn get_result_uses_carried_score_and_answers() {
    // {"privacy_notice":false} percent-encoded into the query string.
    let uri = "/api/v1/assessment/result?score=9&total=10&answers=%7B%22privacy_notice%22%3Afalse%7D";
    let response = build_router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(payload["result"]["score"], json!(9));
    assert_eq!(payload["result"]["tier"], json!("compliant"));
    let steps = payload["action_steps"].as_array().expect("steps array");
    assert_eq!(
        steps[0]["title"],
        json!("Create Comprehensive Privacy Notice")
    );
}

#[tokio::test]
async fn post_report_returns_pdf_attachment() {
    let answers = answers_with_no(&["privacy_notice"]);
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/assessment/report")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({ "score": 9, "total": 10, "answers": answers }))
                .expect("serialize"),
        ))
        .expect("request");

    let response = build_router()
        .oneshot(request)
        .await
        .expect("router dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok()),
        Some("application/pdf")
    );
    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|value| value.to_str().ok())
        .expect("content disposition");
    assert!(disposition.contains("RA10173-Compliance-Report-"));
    assert!(disposition.ends_with(".pdf\""));

    let body = to_bytes(response.into_body(), 8 * 1024 * 1024)
        .await
        .expect("body");
    assert!(body.starts_with(b"%PDF"), "payload must be a PDF document");
}
