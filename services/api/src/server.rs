use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemorySessionStore};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_agent::config::AppConfig;
use job_agent::cv::{CvService, MockCvAnalyzer, UploadPolicy};
use job_agent::error::AppError;
use job_agent::telemetry;
use std::sync::atomic::Ordering;
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
    if let Some(path) = args.csv.take() {
        config.catalog.jobs_csv = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(load_catalog(config.catalog.jobs_csv.as_deref())?);
    let cv_service = Arc::new(CvService::new(
        Arc::new(MockCvAnalyzer::new(config.analysis.delay)),
        UploadPolicy::new(config.analysis.max_upload_bytes),
    ));
    let sessions = Arc::new(InMemorySessionStore::new(config.session.ttl));

    let app = with_service_routes(catalog.clone(), cv_service, sessions)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        listings = catalog.len(),
        "job agent api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
