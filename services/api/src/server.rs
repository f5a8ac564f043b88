use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryFeedbackRepository, InMemoryFootprintRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ecotracker::config::AppConfig;
use ecotracker::error::AppError;
use ecotracker::feedback::FeedbackService;
use ecotracker::footprint::FootprintService;
use ecotracker::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let footprints = Arc::new(FootprintService::new(
        Arc::new(InMemoryFootprintRepository::default()),
        config.recommendations.clone(),
    ));
    let feedback = Arc::new(FeedbackService::new(Arc::new(
        InMemoryFeedbackRepository::default(),
    )));

    let app = with_service_routes(footprints, feedback)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ecotracker api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
