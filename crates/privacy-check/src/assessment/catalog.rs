use serde::Serialize;

/// A single yes/no item in the self-assessment questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub help: &'static str,
}

/// The ordered questionnaire. Order is significant: it drives question
/// numbering in the results view and the exported report.
#[derive(Debug)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: "data_protection_officer",
            prompt: "Do you have a designated Data Protection Officer or similar individual accountable for data privacy compliance?",
            help: "A DPO ensures your organization complies with RA 10173 and serves as the point of contact for data privacy matters.",
        },
        Question {
            id: "privacy_impact_assessment",
            prompt: "Have you conducted a Privacy Impact Assessment (PIA) for your data processing activities?",
            help: "A PIA helps identify and mitigate privacy risks in your data processing operations before they occur.",
        },
        Question {
            id: "privacy_management_program",
            prompt: "Does your organization have a formal Privacy Management Program, including documented policies and security procedures?",
            help: "A comprehensive program with written policies, procedures, and security measures for handling personal data.",
        },
        Question {
            id: "explicit_consent",
            prompt: "Do you obtain explicit, purpose-specific consent from data subjects before collecting their personal data?",
            help: "Consent must be freely given, specific, informed, and unambiguous for each purpose of data processing.",
        },
        Question {
            id: "data_minimization",
            prompt: "Do you limit your collection and processing of personal data to what is strictly necessary for a declared legitimate purpose?",
            help: "Only collect and process personal data that is directly relevant and necessary for your stated business purposes.",
        },
        Question {
            id: "privacy_notice",
            prompt: "Is there an accessible Privacy Notice or Policy that clearly informs data subjects of how their data is processed?",
            help: "A clear, easily accessible document explaining what data you collect, how you use it, and data subject rights.",
        },
        Question {
            id: "data_subject_rights",
            prompt: "Can data subjects access, correct, or request deletion of their personal data held by your organization?",
            help: "Data subjects have rights to access, rectify, erase, and port their personal data under RA 10173.",
        },
        Question {
            id: "security_measures",
            prompt: "Do you implement appropriate organizational, physical, or technical security measures to protect personal data (e.g. encryption, access restrictions)?",
            help: "Implement reasonable and appropriate security measures to protect personal data against unauthorized access, disclosure, or destruction.",
        },
        Question {
            id: "breach_notification",
            prompt: "Do you have a defined incident response or breach notification process to alert both the National Privacy Commission and affected individuals?",
            help: "A documented process to detect, respond to, and report data breaches within required timeframes under RA 10173.",
        },
        Question {
            id: "compliance_audits",
            prompt: "Does your organization conduct regular compliance audits and privacy/security training for employees?",
            help: "Regular assessments and training ensure ongoing compliance and awareness of data privacy responsibilities.",
        },
    ]
}
