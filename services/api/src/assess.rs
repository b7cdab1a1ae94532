use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::Args;
use privacy_check::assessment::{AnswerSet, AssessmentOutcome, AssessmentService};
use privacy_check::config::AppConfig;
use privacy_check::error::AppError;
use privacy_check::guidance::{
    GroqChatClient, GuidanceError, GuidanceService, FALLBACK_ASSISTANT_MESSAGE,
    NO_FEEDBACK_PLACEHOLDER,
};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to a JSON file mapping question ids to yes/no answers
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Write the PDF report here (a directory receives the dated default name)
    #[arg(long)]
    pub(crate) pdf: Option<PathBuf>,
    /// Fetch per-question remediation guidance from the configured AI service
    #[arg(long)]
    pub(crate) guidance: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    /// The question to ask the assistant
    pub(crate) message: String,
}

pub(crate) async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        pdf,
        guidance,
    } = args;

    let raw = std::fs::read_to_string(&answers)?;
    let answers: AnswerSet = serde_json::from_str(&raw)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;

    let assessment = AssessmentService::standard();
    let outcome = assessment.score(&answers)?;
    render_outcome(&outcome);

    if guidance {
        run_remediation_guidance(&assessment, &answers).await?;
    }

    if let Some(path) = pdf {
        let generated_on = Local::now().date_naive();
        let report = assessment.build_report(&answers, &outcome, generated_on);
        let target = if path.is_dir() {
            path.join(report.filename())
        } else {
            path
        };
        let bytes = report.to_pdf_bytes().map_err(AppError::from)?;
        std::fs::write(&target, bytes)?;
        println!("\nPDF report written to {}", target.display());
    }

    Ok(())
}

pub(crate) async fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let client = GroqChatClient::new(&config.guidance).map_err(AppError::from)?;
    let service = GuidanceService::new(Arc::new(client));

    match service.converse(&args.message, &[]).await {
        Ok(reply) => println!("{}", reply.message),
        Err(err) => {
            // The transcript gets the stable apology; detail stays operator-side.
            eprintln!("guidance unavailable: {err}");
            println!("{FALLBACK_ASSISTANT_MESSAGE}");
        }
    }

    Ok(())
}

fn render_outcome(outcome: &AssessmentOutcome) {
    let result = &outcome.result;
    println!("RA 10173 compliance assessment");
    println!(
        "Score: {}/{} ({}%)",
        result.score,
        result.total,
        result.percentage()
    );
    println!("Status: {}", result.title);
    println!("{}", result.description);

    if outcome.action_steps.is_empty() {
        println!("\nRecommended action plan: nothing outstanding");
        return;
    }

    println!("\nRecommended action plan");
    for (index, step) in outcome.action_steps.iter().enumerate() {
        println!(
            "{}. [{} priority] {}",
            index + 1,
            step.priority.label(),
            step.title
        );
        println!("   {}", step.description);
    }
}

/// Fetch remediation feedback for every failed question concurrently.
/// Results are keyed by question id, so arrival order does not matter; a
/// failed lookup degrades to the neutral placeholder for that question only.
async fn run_remediation_guidance(
    assessment: &AssessmentService,
    answers: &AnswerSet,
) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let client = GroqChatClient::new(&config.guidance).map_err(AppError::from)?;
    let service = Arc::new(GuidanceService::new(Arc::new(client)));

    let failed: Vec<(String, String)> = assessment
        .catalog()
        .questions()
        .iter()
        .filter(|question| answers.answer(question.id) == Some(false))
        .map(|question| (question.id.to_string(), question.prompt.to_string()))
        .collect();

    if failed.is_empty() {
        println!("\nAI guidance: no failed questions to review");
        return Ok(());
    }

    let mut tasks = tokio::task::JoinSet::new();
    for (question_id, question_text) in failed.clone() {
        let service = service.clone();
        tasks.spawn(async move {
            let outcome = service.remediation(&question_id, &question_text).await;
            (question_id, outcome)
        });
    }

    let mut generated: BTreeMap<String, Result<String, GuidanceError>> = BTreeMap::new();
    while let Some(joined) = tasks.join_next().await {
        if let Ok((question_id, outcome)) = joined {
            generated.insert(question_id, outcome.map(|feedback| feedback.feedback));
        }
    }

    println!("\nAI guidance for failed questions");
    for (question_id, _) in &failed {
        match generated.get(question_id) {
            Some(Ok(feedback)) => println!("- {question_id}: {feedback}"),
            Some(Err(err)) => {
                eprintln!("guidance for {question_id} unavailable: {err}");
                println!("- {question_id}: {NO_FEEDBACK_PLACEHOLDER}");
            }
            None => println!("- {question_id}: {NO_FEEDBACK_PLACEHOLDER}"),
        }
    }

    Ok(())
}
