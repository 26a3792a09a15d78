use super::common::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use crate::listings::{jobs_router, FixtureJobSource, JobCatalog, ListingQuery, SortKey};

fn router() -> axum::Router {
    let catalog = JobCatalog::load(&FixtureJobSource).expect("fixture loads");
    jobs_router(Arc::new(catalog))
}

async fn get(uri: &str) -> axum::response::Response {
    router()
        .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
        .await
        .expect("router responds")
}

#[tokio::test]
async fn list_returns_sorted_jobs_with_facets() {
    let response = get("/api/v1/jobs?sort=salary&today=2025-10-18").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let returned: Vec<&str> = body["jobs"]
        .as_array()
        .expect("jobs array")
        .iter()
        .filter_map(|job| job["id"].as_str())
        .collect();
    assert_eq!(returned, vec!["5", "4", "1", "3", "2"]);
    assert_eq!(body["total"], 5);
    assert_eq!(body["sort_key"], "salary");
    assert_eq!(body["as_of"], "2025-10-18");
    assert_eq!(body["facets"]["job_types"][0], "Full-time");
    assert!(body.get("empty_state").is_none());
}

#[tokio::test]
async fn list_applies_filters_from_query_string() {
    let response = get("/api/v1/jobs?type=Full-time&experience=3-5%20years").await;
    let body = json_body(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["jobs"][0]["id"], "1");
    assert_eq!(body["jobs"][1]["id"], "4");
}

#[tokio::test]
async fn list_reports_empty_state() {
    let response = get("/api/v1/jobs?search=zzzznomatch").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["empty_state"]["title"], "No jobs found");
}

#[tokio::test]
async fn list_rejects_unknown_sort_keys() {
    let response = get("/api/v1/jobs?sort=newest").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().expect("message").contains("newest"));
}

#[tokio::test]
async fn facets_endpoint_lists_locations() {
    let response = get("/api/v1/jobs/facets").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["locations"][2], "Austin");
}

#[tokio::test]
async fn show_returns_listing_or_not_found() {
    let found = get("/api/v1/jobs/2").await;
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(json_body(found).await["company"], "StartupXYZ");

    let missing = get("/api/v1/jobs/42").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[test]
fn query_defaults_fall_back_to_reference_date() {
    let criteria = ListingQuery::default()
        .into_criteria(as_of())
        .expect("defaults are valid");
    assert_eq!(criteria.as_of, as_of());
    assert_eq!(criteria.sort_key, SortKey::MatchScore);
    assert!(criteria.is_unfiltered());
}
