use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::JobCatalog;
use super::criteria::{FilterCriteria, SortKey, UnknownSortKey};
use super::domain::JobId;
use super::engine::ListingSearch;
use super::facets::ListingFacets;

/// Query-string form of [`FilterCriteria`].
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl ListingQuery {
    pub fn into_criteria(self, fallback_today: NaiveDate) -> Result<FilterCriteria, UnknownSortKey> {
        let sort_key = match self.sort.as_deref() {
            Some(raw) => raw.parse::<SortKey>()?,
            None => SortKey::default(),
        };

        Ok(FilterCriteria {
            search_term: self.search.unwrap_or_default(),
            location: self.location,
            job_type: self.job_type,
            experience: self.experience,
            sort_key,
            as_of: self.today.unwrap_or(fallback_today),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ListingSearchResponse {
    pub as_of: NaiveDate,
    #[serde(flatten)]
    pub search: ListingSearch,
    pub facets: ListingFacets,
}

/// Router builder exposing catalog browsing endpoints.
pub fn jobs_router(catalog: Arc<JobCatalog>) -> Router {
    Router::new()
        .route("/api/v1/jobs", get(list_handler))
        .route("/api/v1/jobs/facets", get(facets_handler))
        .route("/api/v1/jobs/:job_id", get(show_handler))
        .with_state(catalog)
}

pub(crate) async fn list_handler(
    State(catalog): State<Arc<JobCatalog>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let criteria = match query.into_criteria(Local::now().date_naive()) {
        Ok(criteria) => criteria,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let body = ListingSearchResponse {
        as_of: criteria.as_of,
        search: catalog.search(&criteria),
        facets: catalog.facets().clone(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn facets_handler(State(catalog): State<Arc<JobCatalog>>) -> Json<ListingFacets> {
    Json(catalog.facets().clone())
}

pub(crate) async fn show_handler(
    State(catalog): State<Arc<JobCatalog>>,
    Path(job_id): Path<String>,
) -> Response {
    let id = JobId(job_id);
    match catalog.get(&id) {
        Some(listing) => (StatusCode::OK, Json(listing.clone())).into_response(),
        None => {
            let payload = json!({
                "error": format!("job '{id}' not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
