use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::error;

use super::amenities::AmenityLookup;
use super::samples;
use super::service::{ComparisonError, ComparisonRequest, ComparisonService};

/// Router builder exposing HTTP endpoints for project comparison.
pub fn comparison_router<L>(service: Arc<ComparisonService<L>>) -> Router
where
    L: AmenityLookup + 'static,
{
    Router::new()
        .route("/api/v1/comparison", post(compare_handler::<L>))
        .route("/api/v1/comparison/samples", get(samples_handler))
        .with_state(service)
}

pub(crate) async fn compare_handler<L>(
    State(service): State<Arc<ComparisonService<L>>>,
    axum::Json(request): axum::Json<ComparisonRequest>,
) -> Response
where
    L: AmenityLookup + 'static,
{
    match service.compare(request).await {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(ComparisonError::Lookup(source)) => {
            error!(%source, "comparison aborted by amenity lookup failure");
            let payload = json!({
                "error": format!("analysis failed: {source}"),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn samples_handler() -> Response {
    (
        StatusCode::OK,
        axum::Json(samples::sample_projects()),
    )
        .into_response()
}
