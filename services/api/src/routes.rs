use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use qap_compare::workflows::comparison::{comparison_router, AmenityLookup, ComparisonService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_comparison_routes<L>(service: Arc<ComparisonService<L>>) -> axum::Router
where
    L: AmenityLookup + 'static,
{
    comparison_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::doubles::FailingAmenityLookup;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use qap_compare::workflows::comparison::{samples, ComparisonRequest, StaticAmenityCatalog};
    use serde_json::Value;
    use tower::ServiceExt;

    fn sample_body() -> Body {
        let request = ComparisonRequest {
            california: samples::california_sample(0).expect("CA sample"),
            ohio: samples::ohio_sample(0).expect("OH sample"),
        };
        Body::from(serde_json::to_vec(&request).expect("request serializes"))
    }

    async fn body_json(body: Body) -> Value {
        let bytes = to_bytes(body, usize::MAX).await.expect("body readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let service = Arc::new(ComparisonService::new(Arc::new(StaticAmenityCatalog)));
        let app = with_comparison_routes(service);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn comparison_endpoint_serves_sample_report() {
        let service = Arc::new(ComparisonService::new(Arc::new(StaticAmenityCatalog)));
        let app = with_comparison_routes(service);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/comparison")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(sample_body())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["california"]["composite"], 100.0);
        assert_eq!(body["ohio"]["composite"], 92.5);
    }

    #[tokio::test]
    async fn lookup_outage_surfaces_as_analysis_failure() {
        let service = Arc::new(ComparisonService::new(Arc::new(FailingAmenityLookup)));
        let app = with_comparison_routes(service);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/comparison")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(sample_body())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response.into_body()).await;
        assert!(body["error"]
            .as_str()
            .expect("error present")
            .contains("analysis failed"));
    }
}
