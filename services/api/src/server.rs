use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use resume_screen::config::AppConfig;
use resume_screen::error::AppError;
use resume_screen::screening::ResumeScreeningService;
use resume_screen::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{build_engine, AppState, InMemorySubmissionLedger};
use crate::routes::with_screening_routes;

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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(build_engine(&config.screening)?);
    let ledger = Arc::new(InMemorySubmissionLedger::default());
    let screening_service = Arc::new(ResumeScreeningService::new(engine, ledger));

    let app = with_screening_routes(screening_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "resume screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
