use chrono::NaiveDate;
use serde::Serialize;

use super::catalog::QuestionCatalog;
use super::domain::{ActionStep, AnswerSet, ComplianceResult};
use super::recommendation::action_plan;
use super::scoring::{evaluate, result_from_score};
use crate::report::ComplianceReport;

/// Facade combining the question catalog, scorer, and recommendation
/// generator. Stateless apart from the immutable catalog loaded at startup.
pub struct AssessmentService {
    catalog: QuestionCatalog,
}

/// Result plus action plan, the unit every results surface consumes.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentOutcome {
    pub result: ComplianceResult,
    pub action_steps: Vec<ActionStep>,
}

impl AssessmentService {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Score a submitted questionnaire. Submissions must be complete; the
    /// scorer itself never sees a partial answer set.
    pub fn score(&self, answers: &AnswerSet) -> Result<AssessmentOutcome, AssessmentError> {
        let missing = answers.missing_from(&self.catalog).len();
        if missing > 0 {
            return Err(AssessmentError::Incomplete {
                missing,
                total: self.catalog.total() as usize,
            });
        }

        let result = evaluate(answers, self.catalog.total());
        let action_steps = action_plan(answers, result.score);
        Ok(AssessmentOutcome {
            result,
            action_steps,
        })
    }

    /// Rebuild an outcome from the results hand-off (query-string) values.
    ///
    /// The hand-off is tolerated rather than validated: a missing score reads
    /// as 0, a missing total as the catalog size, and the score is clamped
    /// into `[0, total]` so a tampered query string cannot produce an
    /// impossible result.
    pub fn resolve_handoff(
        &self,
        score: Option<u32>,
        total: Option<u32>,
        answers: &AnswerSet,
    ) -> AssessmentOutcome {
        let total = total.unwrap_or_else(|| self.catalog.total());
        let score = score.unwrap_or(0).min(total);
        let result = result_from_score(score, total);
        let action_steps = action_plan(answers, score);
        AssessmentOutcome {
            result,
            action_steps,
        }
    }

    /// Assemble the printable report for an outcome.
    pub fn build_report(
        &self,
        answers: &AnswerSet,
        outcome: &AssessmentOutcome,
        generated_on: NaiveDate,
    ) -> ComplianceReport {
        ComplianceReport::new(
            outcome.result.clone(),
            outcome.action_steps.clone(),
            answers,
            &self.catalog,
            generated_on,
        )
    }
}

/// Validation errors for submitted questionnaires.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("questionnaire incomplete: {missing} of {total} questions are unanswered")]
    Incomplete { missing: usize, total: usize },
}
