use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use job_agent::cv::{cv_router, CvService};
use job_agent::listings::{jobs_router, JobCatalog};
use job_agent::session::{session_router, SessionIssuer};
use serde_json::json;
use std::sync::Arc;

/// Mounts the catalog, CV, and session APIs next to the operational probes.
pub(crate) fn with_service_routes<P>(
    catalog: Arc<JobCatalog>,
    cv: Arc<CvService>,
    sessions: Arc<P>,
) -> axum::Router
where
    P: SessionIssuer + 'static,
{
    jobs_router(catalog)
        .merge(cv_router(cv))
        .merge(session_router(sessions))
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
    use crate::infra::{load_catalog, InMemorySessionStore};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use job_agent::cv::{MockCvAnalyzer, UploadPolicy};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;
    use tower::ServiceExt;

    fn app(readiness: Arc<AtomicBool>) -> axum::Router {
        let catalog = Arc::new(load_catalog(None).expect("fixture loads"));
        let cv = Arc::new(CvService::new(
            Arc::new(MockCvAnalyzer::new(Duration::from_millis(1))),
            UploadPolicy::default(),
        ));
        let sessions = Arc::new(InMemorySessionStore::new(chrono::Duration::minutes(5)));
        let state = AppState {
            readiness,
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_service_routes(catalog, cv, sessions).layer(Extension(state))
    }

    async fn get(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, serde_json::from_slice(&bytes).expect("valid json"))
    }

    #[tokio::test]
    async fn readiness_tracks_the_flag() {
        let readiness = Arc::new(AtomicBool::new(false));
        let (status, body) = get(app(readiness.clone()), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        readiness.store(true, Ordering::Release);
        let (status, body) = get(app(readiness), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn mounts_every_api() {
        let readiness = Arc::new(AtomicBool::new(true));

        let (status, _) = get(app(readiness.clone()), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(app(readiness.clone()), "/api/v1/jobs?location=Austin").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"][0]["id"], "3");

        let (status, body) = get(app(readiness.clone()), "/api/v1/cv/policy").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["description"].as_str().is_some());

        let (status, body) = get(app(readiness), "/api/v1/session").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["authenticated"], false);
    }
}
