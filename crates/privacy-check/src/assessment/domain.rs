use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;

/// Answers keyed by question id. Absence of a key means the question has not
/// been answered yet; there is no separate "unknown" state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, bool>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: impl Into<String>, answer: bool) {
        self.0.insert(question_id.into(), answer);
    }

    pub fn answer(&self, question_id: &str) -> Option<bool> {
        self.0.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count of affirmative answers; this is the compliance score.
    pub fn yes_count(&self) -> u32 {
        self.0.values().filter(|answer| **answer).count() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(id, answer)| (id.as_str(), *answer))
    }

    /// Catalog ids with no recorded answer, in catalog order.
    pub fn missing_from<'c>(&self, catalog: &'c QuestionCatalog) -> Vec<&'c str> {
        catalog
            .questions()
            .iter()
            .filter(|question| !self.0.contains_key(question.id))
            .map(|question| question.id)
            .collect()
    }

    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        self.missing_from(catalog).is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, answer)| (id.into(), answer))
                .collect(),
        )
    }
}

/// Compliance tier derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceTier {
    Compliant,
    PartiallyCompliant,
    NonCompliant,
}

impl ComplianceTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::PartiallyCompliant => "partially-compliant",
            Self::NonCompliant => "non-compliant",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Compliant => "Likely Compliant",
            Self::PartiallyCompliant => "Partially Compliant",
            Self::NonCompliant => "Non-Compliant",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Compliant => {
                "Excellent! Your organization demonstrates strong compliance with RA 10173 requirements. Continue maintaining these high standards."
            }
            Self::PartiallyCompliant => {
                "Your organization has established some important compliance measures, but there are critical areas that require immediate attention to meet RA 10173 standards."
            }
            Self::NonCompliant => {
                "Your organization has significant compliance gaps that pose serious legal and regulatory risks. Immediate action is required to meet RA 10173 requirements."
            }
        }
    }
}

/// Derived classification of a completed questionnaire. Never persisted;
/// recomputed from an [`AnswerSet`] on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceResult {
    pub tier: ComplianceTier,
    pub score: u32,
    pub total: u32,
    pub title: &'static str,
    pub description: &'static str,
}

impl ComplianceResult {
    /// Score as a rounded percentage of the question total.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.score * 100 + self.total / 2) / self.total
    }
}

/// Urgency attached to a remediation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A single prioritized remediation recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}
