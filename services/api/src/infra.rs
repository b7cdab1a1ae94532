use metrics_exporter_prometheus::PrometheusHandle;
use privacy_check::config::GuidanceConfig;
use privacy_check::error::AppError;
use privacy_check::guidance::{GroqChatClient, GuidanceService};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wire the production guidance stack. A missing API key is not an error
/// here: the service boots and each guidance call reports the configuration
/// problem instead.
pub(crate) fn guidance_service(
    config: &GuidanceConfig,
) -> Result<Arc<GuidanceService<GroqChatClient>>, AppError> {
    let client = GroqChatClient::new(config).map_err(AppError::from)?;
    Ok(Arc::new(GuidanceService::new(Arc::new(client))))
}
