mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use privacy_check::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
