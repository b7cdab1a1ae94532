//! Printable compliance report assembly and PDF export.
//!
//! [`ComplianceReport`] turns a scored assessment into a structured document
//! (header, executive summary, per-question results, action plan,
//! disclaimer), [`layout`] paginates it, and [`pdf`] draws the pages.

mod layout;
mod pdf;

use chrono::NaiveDate;

use crate::assessment::{ActionStep, AnswerSet, ComplianceResult, Priority, QuestionCatalog};
use layout::{Align, Block, Element, FontFace, AMBER, BLACK, GRAY, GREEN, RED};

const REPORT_TITLE: &str = "RA 10173 Compliance Report";
const REPORT_SUBTITLE: &str = "Philippine Data Privacy Act Assessment";
const DISCLAIMER: &str = "Disclaimer: This assessment provides general guidance based on RA 10173 requirements. For comprehensive compliance evaluation, consult with qualified legal professionals.";
const ATTRIBUTION: &str = "Generated by Philippine Data Privacy Compliance Checker";

/// Rendering failures. Report generation must fail loudly, never silently.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to render PDF: {0}")]
    Rendering(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryStatus {
    Compliant,
    NonCompliant,
}

/// One answered question as rendered in the results section.
#[derive(Debug, Clone)]
struct AssessmentEntry {
    label: String,
    status: EntryStatus,
}

/// Snapshot of everything the exported document renders. Built once from the
/// assessment outcome; purely derived data, never persisted.
pub struct ComplianceReport {
    generated_on: NaiveDate,
    result: ComplianceResult,
    steps: Vec<ActionStep>,
    entries: Vec<AssessmentEntry>,
}

impl ComplianceReport {
    /// Assemble the document. Answered catalog questions come first in
    /// catalog order; answers for ids outside the catalog follow, so every
    /// entry in the answer set shows up exactly once.
    pub fn new(
        result: ComplianceResult,
        steps: Vec<ActionStep>,
        answers: &AnswerSet,
        catalog: &QuestionCatalog,
        generated_on: NaiveDate,
    ) -> Self {
        let mut entries = Vec::with_capacity(answers.len());
        for question in catalog.questions() {
            if let Some(answer) = answers.answer(question.id) {
                entries.push(AssessmentEntry {
                    label: humanize_id(question.id),
                    status: status_for(answer),
                });
            }
        }
        for (question_id, answer) in answers.iter() {
            if !catalog.contains(question_id) {
                entries.push(AssessmentEntry {
                    label: humanize_id(question_id),
                    status: status_for(answer),
                });
            }
        }

        Self {
            generated_on,
            result,
            steps,
            entries,
        }
    }

    /// Download name carrying the generation date.
    pub fn filename(&self) -> String {
        format!(
            "RA10173-Compliance-Report-{}.pdf",
            self.generated_on.format("%Y-%m-%d")
        )
    }

    /// Render the document to PDF bytes.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, ReportError> {
        let pages = layout::paginate(&self.blocks());
        pdf::render(REPORT_TITLE, &pages)
    }

    fn blocks(&self) -> Vec<Block> {
        let mut blocks = Vec::new();

        blocks.push(Block::new(
            vec![
                centered(REPORT_TITLE, 20.0, FontFace::Bold),
                Element::Spacer(3.0),
                centered(REPORT_SUBTITLE, 12.0, FontFace::Regular),
                Element::Spacer(4.0),
                centered(
                    &format!("Generated on: {}", self.generated_on.format("%B %d, %Y")),
                    10.0,
                    FontFace::Regular,
                ),
                centered(
                    &format!(
                        "Assessment completed: {} of {} questions",
                        self.entries.len(),
                        self.result.total
                    ),
                    10.0,
                    FontFace::Regular,
                ),
                Element::Spacer(4.0),
                Element::Rule,
            ],
            6.0,
        ));

        blocks.push(Block::new(
            vec![
                heading("Executive Summary"),
                Element::Spacer(2.0),
                body_line(&format!("Status: {}", self.result.title), 12.0),
                body_line(
                    &format!(
                        "Compliance Score: {}/{} ({}%)",
                        self.result.score,
                        self.result.total,
                        self.result.percentage()
                    ),
                    12.0,
                ),
                Element::Spacer(2.0),
                paragraph(self.result.description),
            ],
            8.0,
        ));

        if !self.entries.is_empty() {
            blocks.push(Block::new(vec![heading("Assessment Results")], 3.0));
            for (index, entry) in self.entries.iter().enumerate() {
                let (tag, tag_color) = match entry.status {
                    EntryStatus::Compliant => ("Compliant", GREEN),
                    EntryStatus::NonCompliant => ("Non-Compliant", RED),
                };
                blocks.push(Block::new(
                    vec![Element::TaggedLine {
                        text: format!("{}. {}", index + 1, entry.label),
                        size: 10.0,
                        tag: tag.to_string(),
                        tag_color,
                    }],
                    2.0,
                ));
            }
        }

        if !self.steps.is_empty() {
            blocks.push(Block::new(
                vec![Element::Spacer(4.0), heading("Recommended Action Plan")],
                3.0,
            ));
            for (index, step) in self.steps.iter().enumerate() {
                blocks.push(step_block(index + 1, step));
            }
        }

        blocks.push(Block::new(
            vec![
                Element::Spacer(4.0),
                Element::Rule,
                Element::Spacer(2.0),
                Element::Text {
                    text: DISCLAIMER.to_string(),
                    size: 8.0,
                    face: FontFace::Oblique,
                    color: GRAY,
                    align: Align::Left,
                },
                Element::Spacer(2.0),
                centered(ATTRIBUTION, 8.0, FontFace::Regular),
            ],
            0.0,
        ));

        blocks
    }
}

fn status_for(answer: bool) -> EntryStatus {
    if answer {
        EntryStatus::Compliant
    } else {
        EntryStatus::NonCompliant
    }
}

/// `breach_notification` becomes `Breach Notification`.
fn humanize_id(question_id: &str) -> String {
    question_id
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn centered(text: &str, size: f64, face: FontFace) -> Element {
    Element::Text {
        text: text.to_string(),
        size,
        face,
        color: BLACK,
        align: Align::Center,
    }
}

fn heading(text: &str) -> Element {
    Element::Text {
        text: text.to_string(),
        size: 16.0,
        face: FontFace::Bold,
        color: BLACK,
        align: Align::Left,
    }
}

fn body_line(text: &str, size: f64) -> Element {
    Element::Text {
        text: text.to_string(),
        size,
        face: FontFace::Regular,
        color: BLACK,
        align: Align::Left,
    }
}

fn paragraph(text: &str) -> Element {
    Element::Text {
        text: text.to_string(),
        size: 10.0,
        face: FontFace::Regular,
        color: BLACK,
        align: Align::Left,
    }
}

fn step_block(number: usize, step: &ActionStep) -> Block {
    let badge_color = match step.priority {
        Priority::High => RED,
        Priority::Medium => AMBER,
        Priority::Low => GREEN,
    };
    Block::new(
        vec![
            Element::Text {
                text: format!("{number}. {}", step.title),
                size: 12.0,
                face: FontFace::Bold,
                color: BLACK,
                align: Align::Left,
            },
            Element::Text {
                text: format!("[{} PRIORITY]", step.priority.label().to_uppercase()),
                size: 8.0,
                face: FontFace::Bold,
                color: badge_color,
                align: Align::Left,
            },
            Element::Spacer(1.0),
            paragraph(&step.description),
        ],
        5.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{result_from_score, AnswerSet, ComplianceTier, QuestionCatalog};

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date")
    }

    fn full_answers(failing: &[&str]) -> AnswerSet {
        QuestionCatalog::standard()
            .questions()
            .iter()
            .map(|question| (question.id, !failing.contains(&question.id)))
            .collect()
    }

    fn sample_steps() -> Vec<ActionStep> {
        vec![ActionStep {
            title: "Create Comprehensive Privacy Notice".to_string(),
            description: "Publish a clear, accessible privacy policy.".to_string(),
            priority: Priority::High,
        }]
    }

    #[test]
    fn filename_carries_generation_date() {
        let catalog = QuestionCatalog::standard();
        let report = ComplianceReport::new(
            result_from_score(9, 10),
            sample_steps(),
            &full_answers(&["privacy_notice"]),
            &catalog,
            sample_date(),
        );
        assert_eq!(report.filename(), "RA10173-Compliance-Report-2025-11-03.pdf");
    }

    #[test]
    fn entries_follow_catalog_order_and_cover_every_answer() {
        let catalog = QuestionCatalog::standard();
        let mut answers = full_answers(&["privacy_notice"]);
        answers.record("data_retention_policy", false);

        let report = ComplianceReport::new(
            result_from_score(9, 10),
            sample_steps(),
            &answers,
            &catalog,
            sample_date(),
        );

        assert_eq!(report.entries.len(), 11);
        assert_eq!(report.entries[0].label, "Data Protection Officer");
        assert_eq!(report.entries[10].label, "Data Retention Policy");
        assert_eq!(report.entries[10].status, EntryStatus::NonCompliant);
        let failing = report
            .entries
            .iter()
            .filter(|entry| entry.status == EntryStatus::NonCompliant)
            .count();
        assert_eq!(failing, 2);
    }

    #[test]
    fn oversized_answer_set_spans_pages_and_keeps_every_entry() {
        let catalog = QuestionCatalog::standard();
        let mut answers = full_answers(&[]);
        for index in 0..80 {
            answers.record(format!("supplemental_control_{index:02}"), index % 2 == 0);
        }

        let report = ComplianceReport::new(
            result_from_score(10, 10),
            sample_steps(),
            &answers,
            &catalog,
            sample_date(),
        );

        let pages = layout::paginate(&report.blocks());
        assert!(pages.len() > 1, "90 entries cannot fit one page");

        let rendered_entries: usize = pages
            .iter()
            .flatten()
            .filter(|placed| matches!(placed.element, Element::TaggedLine { .. }))
            .count();
        assert_eq!(rendered_entries, report.entries.len());
        assert_eq!(rendered_entries, 90);
    }

    #[test]
    fn pdf_bytes_start_with_magic_number() {
        let catalog = QuestionCatalog::standard();
        let answers = full_answers(&["privacy_notice", "breach_notification"]);
        let result = result_from_score(8, 10);
        assert_eq!(result.tier, ComplianceTier::Compliant);

        let report =
            ComplianceReport::new(result, sample_steps(), &answers, &catalog, sample_date());
        let bytes = report.to_pdf_bytes().expect("report renders");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn humanize_id_title_cases_words() {
        assert_eq!(humanize_id("data_protection_officer"), "Data Protection Officer");
        assert_eq!(humanize_id("privacy_notice"), "Privacy Notice");
    }
}
