//! Questionnaire catalog, scoring, and remediation planning.
//!
//! Scoring and recommendation generation are pure functions over an
//! [`AnswerSet`]; [`AssessmentService`] wraps them together with the
//! immutable catalog and input validation, and [`assessment_router`] exposes
//! the HTTP surface.

pub mod catalog;
pub mod domain;
mod recommendation;
mod router;
mod scoring;
mod service;

#[cfg(test)]
mod tests;

pub use catalog::{Question, QuestionCatalog};
pub use domain::{ActionStep, AnswerSet, ComplianceResult, ComplianceTier, Priority};
pub use recommendation::{action_plan, plan_cap};
pub use router::assessment_router;
pub use scoring::{
    classify, evaluate, result_from_score, COMPLIANT_MIN_SCORE, PARTIALLY_COMPLIANT_MIN_SCORE,
};
pub use service::{AssessmentError, AssessmentOutcome, AssessmentService};
