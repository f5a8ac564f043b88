use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use ecotracker::feedback::{feedback_router, FeedbackRepository, FeedbackService};
use ecotracker::footprint::{footprint_router, FootprintRepository, FootprintService};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) fn with_service_routes<R, F>(
    footprints: Arc<FootprintService<R>>,
    feedback: Arc<FeedbackService<F>>,
) -> Router
where
    R: FootprintRepository + 'static,
    F: FeedbackRepository + 'static,
{
    footprint_router(footprints)
        .merge(feedback_router(feedback))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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
    use crate::infra::{InMemoryFeedbackRepository, InMemoryFootprintRepository};
    use axum::body::Body;
    use axum::http::Request;
    use ecotracker::footprint::RecommendationThresholds;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let footprints = Arc::new(FootprintService::new(
            Arc::new(InMemoryFootprintRepository::default()),
            RecommendationThresholds::standard(),
        ));
        let feedback = Arc::new(FeedbackService::new(Arc::new(
            InMemoryFeedbackRepository::default(),
        )));
        with_service_routes(footprints, feedback).layer(Extension(state))
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        let request = Request::builder()
            .uri(uri)
            .header("x-user-id", "ana")
            .body(Body::empty())
            .expect("request builds");
        app.oneshot(request).await.expect("router responds").status()
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        assert_eq!(
            status_of(app(false), "/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(status_of(app(true), "/ready").await, StatusCode::OK);
        assert_eq!(status_of(app(false), "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn domain_routes_are_mounted() {
        assert_eq!(status_of(app(true), "/api/v1/footprints").await, StatusCode::OK);
        assert_eq!(
            status_of(app(true), "/api/v1/footprints/summary").await,
            StatusCode::OK
        );
        assert_eq!(
            status_of(app(true), "/api/v1/feedback/summary").await,
            StatusCode::OK
        );
        assert_eq!(status_of(app(true), "/metrics").await, StatusCode::OK);
    }
}
