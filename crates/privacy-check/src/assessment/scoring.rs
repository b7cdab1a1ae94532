use super::domain::{AnswerSet, ComplianceResult, ComplianceTier};

/// Lowest score that still classifies as compliant.
pub const COMPLIANT_MIN_SCORE: u32 = 8;
/// Lowest score that still classifies as partially compliant.
pub const PARTIALLY_COMPLIANT_MIN_SCORE: u32 = 5;

/// Map a score onto its compliance tier. Boundaries are inclusive: 8 and up
/// is compliant, 5 through 7 partially compliant, 4 and below non-compliant.
pub const fn classify(score: u32) -> ComplianceTier {
    if score >= COMPLIANT_MIN_SCORE {
        ComplianceTier::Compliant
    } else if score >= PARTIALLY_COMPLIANT_MIN_SCORE {
        ComplianceTier::PartiallyCompliant
    } else {
        ComplianceTier::NonCompliant
    }
}

/// Build the result for an already-known score, e.g. one carried in the
/// results hand-off query string.
pub fn result_from_score(score: u32, total: u32) -> ComplianceResult {
    let tier = classify(score);
    ComplianceResult {
        tier,
        score,
        total,
        title: tier.title(),
        description: tier.description(),
    }
}

/// Score a completed answer set. Completeness is the caller's contract; this
/// stays a pure count over whatever answers are present.
pub fn evaluate(answers: &AnswerSet, total: u32) -> ComplianceResult {
    result_from_score(answers.yes_count(), total)
}
