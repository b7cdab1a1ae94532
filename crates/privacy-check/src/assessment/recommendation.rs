use super::domain::{ActionStep, AnswerSet, ComplianceTier, Priority};
use super::scoring::{classify, COMPLIANT_MIN_SCORE, PARTIALLY_COMPLIANT_MIN_SCORE};

/// Remediation content attached to a failed question.
struct RemediationRule {
    question_id: &'static str,
    title: &'static str,
    description: &'static str,
    priority: Priority,
}

/// Rule order is the declared presentation order of the action plan.
const REMEDIATION_RULES: &[RemediationRule] = &[
    RemediationRule {
        question_id: "data_protection_officer",
        title: "Designate a Data Protection Officer",
        description: "Appoint a qualified individual to oversee data privacy compliance, serve as the contact point for the NPC, and ensure ongoing adherence to RA 10173.",
        priority: Priority::High,
    },
    RemediationRule {
        question_id: "privacy_impact_assessment",
        title: "Conduct Privacy Impact Assessments",
        description: "Perform systematic assessments of data processing activities to identify privacy risks and implement appropriate safeguards before processing begins.",
        priority: Priority::High,
    },
    RemediationRule {
        question_id: "privacy_management_program",
        title: "Establish Privacy Management Program",
        description: "Develop comprehensive written policies, procedures, and security measures for handling personal data throughout its lifecycle.",
        priority: Priority::High,
    },
    RemediationRule {
        question_id: "explicit_consent",
        title: "Implement Explicit Consent Mechanisms",
        description: "Establish clear, purpose-specific consent processes that are freely given, informed, and unambiguous for each data processing purpose.",
        priority: Priority::High,
    },
    RemediationRule {
        question_id: "data_minimization",
        title: "Apply Data Minimization Principles",
        description: "Review and limit data collection to only what is strictly necessary and directly relevant for your declared legitimate business purposes.",
        priority: Priority::Medium,
    },
    RemediationRule {
        question_id: "privacy_notice",
        title: "Create Comprehensive Privacy Notice",
        description: "Publish a clear, accessible privacy policy explaining data collection, use, sharing, retention, and data subject rights under RA 10173.",
        priority: Priority::High,
    },
    RemediationRule {
        question_id: "data_subject_rights",
        title: "Implement Data Subject Rights Procedures",
        description: "Establish processes for data subjects to access, correct, delete, and port their personal data, with clear timelines and response mechanisms.",
        priority: Priority::High,
    },
    RemediationRule {
        question_id: "security_measures",
        title: "Strengthen Data Security Measures",
        description: "Implement appropriate technical, organizational, and physical safeguards including encryption, access controls, and secure data storage.",
        priority: Priority::High,
    },
    RemediationRule {
        question_id: "breach_notification",
        title: "Develop Breach Response Procedures",
        description: "Create documented incident response plans for detecting, containing, and reporting data breaches to the NPC and affected individuals within required timeframes.",
        priority: Priority::High,
    },
    RemediationRule {
        question_id: "compliance_audits",
        title: "Establish Regular Compliance Monitoring",
        description: "Implement periodic compliance audits and mandatory privacy training programs to ensure ongoing adherence to RA 10173 requirements.",
        priority: Priority::Medium,
    },
];

/// Longest action plan shown per tier.
pub const fn plan_cap(tier: ComplianceTier) -> usize {
    match tier {
        ComplianceTier::Compliant => 3,
        ComplianceTier::PartiallyCompliant => 5,
        ComplianceTier::NonCompliant => 7,
    }
}

fn rule_for(question_id: &str) -> Option<&'static RemediationRule> {
    REMEDIATION_RULES
        .iter()
        .find(|rule| rule.question_id == question_id)
}

fn fallback_step(question_id: &str) -> ActionStep {
    ActionStep {
        title: "Address This Compliance Requirement".to_string(),
        description: format!(
            "The assessment item '{question_id}' was answered \"No\" but has no specific playbook yet. Review the requirement and put a documented remediation plan in place to address this compliance requirement under RA 10173."
        ),
        priority: Priority::Medium,
    }
}

/// Build the prioritized action plan for a scored answer set.
///
/// Mapped rules are emitted in declared rule order, one per failed question.
/// Failed ids without a mapped rule get a generic fallback step rather than
/// being dropped, so the step list never silently disagrees with the score.
/// A score-dependent closing step is appended before the tier cap applies.
pub fn action_plan(answers: &AnswerSet, score: u32) -> Vec<ActionStep> {
    let mut steps = Vec::new();

    for rule in REMEDIATION_RULES {
        if answers.answer(rule.question_id) == Some(false) {
            steps.push(ActionStep {
                title: rule.title.to_string(),
                description: rule.description.to_string(),
                priority: rule.priority,
            });
        }
    }

    for (question_id, answer) in answers.iter() {
        if !answer && rule_for(question_id).is_none() {
            steps.push(fallback_step(question_id));
        }
    }

    if score >= COMPLIANT_MIN_SCORE {
        steps.push(ActionStep {
            title: "Maintain Compliance Excellence".to_string(),
            description: "Continue regular compliance reviews and stay updated on NPC guidelines and regulatory changes to maintain your high compliance standards.".to_string(),
            priority: Priority::Low,
        });
    }

    if score < PARTIALLY_COMPLIANT_MIN_SCORE {
        steps.push(ActionStep {
            title: "Seek Professional Legal Consultation".to_string(),
            description: "Given significant compliance gaps, engage qualified data privacy lawyers or consultants to develop a comprehensive remediation strategy.".to_string(),
            priority: Priority::High,
        });
    }

    steps.truncate(plan_cap(classify(score)));
    steps
}
