use axum::body::to_bytes;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::listings::domain::{JobId, JobListing};
use crate::listings::FilterCriteria;

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid date")
}

pub(super) fn criteria() -> FilterCriteria {
    FilterCriteria::new(as_of())
}

pub(super) fn ids(listings: &[JobListing]) -> Vec<&str> {
    listings.iter().map(|listing| listing.id.as_str()).collect()
}

pub(super) fn listing(id: &str, match_score: u8, salary: &str, posted_date: &str) -> JobListing {
    JobListing {
        id: JobId::new(id),
        title: format!("Role {id}"),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        job_type: "Contract".to_string(),
        salary: salary.to_string(),
        experience: "1-2 years".to_string(),
        skills: vec!["Rust".to_string()],
        match_score,
        posted_date: posted_date.to_string(),
        description: String::new(),
        is_remote: true,
    }
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json")
}
