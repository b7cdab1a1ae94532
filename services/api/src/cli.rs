use crate::assess::{run_assess, run_chat, AssessArgs, ChatArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use privacy_check::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Data Privacy Compliance Checker",
    about = "Run the RA 10173 compliance self-assessment service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answers file and print the result with its action plan
    Assess(AssessArgs),
    /// Ask the AI legal assistant a one-off question
    Chat(ChatArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args).await,
        Command::Chat(args) => run_chat(args).await,
    }
}
