use crate::assessment::{AnswerSet, AssessmentService, QuestionCatalog};

pub(super) fn service() -> AssessmentService {
    AssessmentService::standard()
}

/// Answer every catalog question, marking the ids in `no_ids` as "No".
pub(super) fn answers_with_no(no_ids: &[&str]) -> AnswerSet {
    QuestionCatalog::standard()
        .questions()
        .iter()
        .map(|question| (question.id, !no_ids.contains(&question.id)))
        .collect()
}

pub(super) fn complete_yes_answers() -> AnswerSet {
    answers_with_no(&[])
}
