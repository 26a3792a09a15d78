//! Listing filter/sort engine.
//!
//! Everything here is a pure, single-pass, in-memory transform: the input
//! slice is never mutated and the same criteria always yield the same order.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use super::criteria::{FilterCriteria, SortKey};
use super::domain::JobListing;

/// Filters `listings` by `criteria` and returns them in the requested order.
pub fn filter_and_sort(listings: &[JobListing], criteria: &FilterCriteria) -> Vec<JobListing> {
    let mut retained: Vec<JobListing> = listings
        .iter()
        .filter(|listing| matches(listing, criteria))
        .cloned()
        .collect();

    sort_listings(&mut retained, criteria.sort_key, criteria.as_of);
    retained
}

/// True when `listing` passes every active predicate in `criteria`.
pub fn matches(listing: &JobListing, criteria: &FilterCriteria) -> bool {
    matches_search(listing, &criteria.search_term)
        && criteria
            .location_filter()
            .map_or(true, |location| listing.location.contains(location))
        && criteria
            .job_type_filter()
            .map_or(true, |job_type| listing.job_type == job_type)
        && criteria
            .experience_filter()
            .map_or(true, |experience| listing.experience == experience)
}

fn matches_search(listing: &JobListing, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    listing.title.to_lowercase().contains(&needle)
        || listing.company.to_lowercase().contains(&needle)
        || listing
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
}

/// Stable sort; entries without a usable key keep their order at the tail.
fn sort_listings(listings: &mut [JobListing], sort_key: SortKey, as_of: NaiveDate) {
    match sort_key {
        SortKey::MatchScore => listings.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
        SortKey::PostedDate => listings.sort_by_cached_key(|listing| {
            let resolved = listing.posted().resolve(as_of);
            (resolved.is_none(), resolved)
        }),
        SortKey::Salary => listings.sort_by(|a, b| {
            known_first_desc(
                a.salary_range().map(|range| range.min),
                b.salary_range().map(|range| range.min),
            )
        }),
    }
}

fn known_first_desc<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Copy rendered when a query retains nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

impl EmptyState {
    pub const NO_JOBS: EmptyState = EmptyState {
        title: "No jobs found",
        hint: "Try adjusting your search criteria or filters.",
    };
}

/// Result of one catalog query, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ListingSearch {
    pub jobs: Vec<JobListing>,
    pub total: usize,
    pub sort_key: SortKey,
    pub sort_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

impl ListingSearch {
    pub fn run(listings: &[JobListing], criteria: &FilterCriteria) -> Self {
        let jobs = filter_and_sort(listings, criteria);
        let empty_state = jobs.is_empty().then_some(EmptyState::NO_JOBS);

        Self {
            total: jobs.len(),
            jobs,
            sort_key: criteria.sort_key,
            sort_label: criteria.sort_key.label(),
            empty_state,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
