//! Report export specifications through the public facade.

use chrono::NaiveDate;
use privacy_check::assessment::{AnswerSet, AssessmentService, QuestionCatalog};

fn answers_with_no(no_ids: &[&str]) -> AnswerSet {
    QuestionCatalog::standard()
        .questions()
        .iter()
        .map(|question| (question.id, !no_ids.contains(&question.id)))
        .collect()
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date")
}

#[test]
fn exported_report_is_a_dated_pdf() {
    let service = AssessmentService::standard();
    let answers = answers_with_no(&["privacy_notice", "breach_notification"]);
    let outcome = service.score(&answers).expect("complete submission");

    let report = service.build_report(&answers, &outcome, report_date());
    assert_eq!(report.filename(), "RA10173-Compliance-Report-2025-11-03.pdf");

    let bytes = report.to_pdf_bytes().expect("report renders");
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1024, "document should carry real content");
}

#[test]
fn report_renders_even_for_empty_handoff() {
    let service = AssessmentService::standard();
    let answers = AnswerSet::default();
    let outcome = service.resolve_handoff(None, None, &answers);

    let report = service.build_report(&answers, &outcome, report_date());
    let bytes = report.to_pdf_bytes().expect("report renders");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn large_answer_sets_produce_multi_page_documents() {
    let service = AssessmentService::standard();
    let mut answers = answers_with_no(&[]);
    for index in 0..80 {
        answers.record(format!("supplemental_control_{index:02}"), index % 3 != 0);
    }
    let outcome = service.resolve_handoff(Some(10), Some(10), &answers);

    let report = service.build_report(&answers, &outcome, report_date());
    let bytes = report.to_pdf_bytes().expect("report renders");

    // A second page implies a second /Page object in the document body;
    // subtract the /Pages tree node that also matches the prefix.
    let haystack = String::from_utf8_lossy(&bytes);
    let page_objects =
        haystack.matches("/Type /Page").count() - haystack.matches("/Type /Pages").count();
    assert!(
        page_objects > 1,
        "90 assessment entries must paginate, found {page_objects} page object(s)"
    );
}
