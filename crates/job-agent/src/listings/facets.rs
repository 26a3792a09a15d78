use std::collections::HashSet;

use serde::Serialize;

use super::domain::JobListing;

/// Distinct filter options derived from the full, unfiltered collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingFacets {
    pub locations: Vec<String>,
    pub job_types: Vec<String>,
    pub experience_levels: Vec<String>,
}

impl ListingFacets {
    pub fn from_listings(listings: &[JobListing]) -> Self {
        Self {
            locations: distinct(listings.iter().map(JobListing::city)),
            job_types: distinct(listings.iter().map(|listing| listing.job_type.as_str())),
            experience_levels: distinct(listings.iter().map(|listing| listing.experience.as_str())),
        }
    }
}

/// First-seen order, duplicates dropped.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_keeps_first_seen_order_across_many_repeats() {
        let values: Vec<String> = (0..5_000).map(|i| format!("value-{}", i % 7)).collect();
        let unique = distinct(values.iter().map(String::as_str));

        let expected: Vec<String> = (0..7).map(|i| format!("value-{i}")).collect();
        assert_eq!(unique, expected);
    }
}
