use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_comparison_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use qap_compare::config::AppConfig;
use qap_compare::error::AppError;
use qap_compare::telemetry;
use qap_compare::workflows::comparison::{ComparisonService, StaticAmenityCatalog};
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let comparison_service = Arc::new(ComparisonService::new(Arc::new(StaticAmenityCatalog)));

    let app = with_comparison_routes(comparison_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "QAP comparison service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
