use crate::cli::ServeArgs;
use crate::infra::{guidance_service, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use privacy_check::assessment::AssessmentService;
use privacy_check::config::AppConfig;
use privacy_check::error::AppError;
use privacy_check::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if config.guidance.api_key.is_none() {
        warn!("GROQ_API_KEY is not set; guidance endpoints will report a configuration error");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let assessment = Arc::new(AssessmentService::standard());
    let guidance = guidance_service(&config.guidance)?;

    let app = with_service_routes(assessment, guidance)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "compliance assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
