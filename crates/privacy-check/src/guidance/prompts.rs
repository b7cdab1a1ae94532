//! Fixed prompts and the question-id to topic-phrase table.
//!
//! The system prompts are part of the product surface: they pin the
//! assistant's persona and topical scope and are always prepended
//! server-side, never accepted from callers.

pub(crate) const CONVERSATION_SYSTEM_PROMPT: &str = "\
You are a legal assistant specializing in the Philippine Data Privacy Act of 2012 (Republic Act No. 10173). Your role is to help users understand their obligations and rights under this law.

Key areas you should focus on:
- Data collection and consent requirements
- Data subject rights (access, rectification, erasure, etc.)
- Data controller and processor obligations
- Security measures and breach notification
- National Privacy Commission (NPC) guidelines
- Penalties and enforcement
- Exemptions and special cases

Guidelines for responses:
- Provide accurate, helpful information about RA 10173
- Use clear, professional language
- Reference specific sections of the law when relevant
- Suggest consulting legal professionals for complex situations
- Keep responses concise but comprehensive
- If unsure about something, acknowledge limitations

Always remind users that this is general guidance and not legal advice.";

pub(crate) const REMEDIATION_SYSTEM_PROMPT: &str = "\
You are a Philippine data privacy law expert specializing in RA 10173 (Data Privacy Act of 2012).

Your task is to provide specific, actionable feedback for organizations that answered \"No\" to compliance questions. Your responses should be:

1. Legally accurate based on RA 10173 requirements
2. Beginner-friendly and easy to understand
3. Actionable with specific next steps
4. 2-3 sentences maximum
5. Professional but approachable tone

Focus on:
- What the law requires
- Why it's important for compliance
- Immediate practical steps they can take
- Potential risks of non-compliance

Do not include legal disclaimers in your response - keep it focused on practical guidance.";

const FALLBACK_TOPIC: &str = "this compliance requirement";

/// Short human-readable phrase for a failed question, folded into the
/// remediation prompt. Unrecognized ids get the generic fallback phrase.
pub(crate) fn topic_phrase(question_id: &str) -> &'static str {
    match question_id {
        "data_protection_officer" => "appointing a Data Protection Officer or privacy compliance lead",
        "privacy_impact_assessment" => "conducting Privacy Impact Assessments for data processing activities",
        "privacy_management_program" => "establishing a formal Privacy Management Program with documented policies",
        "explicit_consent" => "obtaining explicit, purpose-specific consent before collecting personal data",
        "data_minimization" => "limiting data collection to what's necessary for legitimate purposes",
        "privacy_notice" => "providing accessible Privacy Notice explaining data processing practices",
        "data_subject_rights" => "enabling data subjects to access, correct, or delete their personal data",
        "security_measures" => "implementing appropriate security measures to protect personal data",
        "breach_notification" => "having incident response procedures for data breaches",
        "compliance_audits" => "conducting regular compliance audits and employee training",
        _ => FALLBACK_TOPIC,
    }
}

pub(crate) fn remediation_prompt(question_text: &str, topic: &str) -> String {
    format!(
        "A Philippine organization answered \"No\" to this RA 10173 compliance question: \"{question_text}\"\n\n\
         Provide specific, actionable feedback about {topic} under Philippine Data Privacy Act. \
         Explain what they need to do to comply and why it's important. \
         Keep it concise (2-3 sentences) and beginner-friendly."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::QuestionCatalog;

    #[test]
    fn every_catalog_id_has_a_topic_phrase() {
        for question in QuestionCatalog::standard().questions() {
            assert_ne!(
                topic_phrase(question.id),
                FALLBACK_TOPIC,
                "{} should have a dedicated topic phrase",
                question.id
            );
        }
    }

    #[test]
    fn unknown_ids_use_the_fallback_phrase() {
        assert_eq!(topic_phrase("data_retention_policy"), FALLBACK_TOPIC);
    }

    #[test]
    fn remediation_prompt_embeds_question_and_topic() {
        let prompt = remediation_prompt(
            "Do you have a designated Data Protection Officer?",
            topic_phrase("data_protection_officer"),
        );
        assert!(prompt.contains("Data Protection Officer?"));
        assert!(prompt.contains("appointing a Data Protection Officer"));
    }
}
