use std::collections::HashSet;

use tracing::{debug, info};

use super::criteria::FilterCriteria;
use super::domain::{JobId, JobListing};
use super::engine::ListingSearch;
use super::facets::ListingFacets;
use super::source::{JobSource, SourceError};

pub const MAX_MATCH_SCORE: u8 = 100;

/// Immutable listing collection loaded once at startup.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    listings: Vec<JobListing>,
    facets: ListingFacets,
}

impl JobCatalog {
    pub fn load(source: &dyn JobSource) -> Result<Self, CatalogError> {
        let listings = source.list_jobs()?;
        let catalog = Self::from_listings(listings)?;
        info!(
            source = %source.describe(),
            listings = catalog.len(),
            "job catalog loaded"
        );
        Ok(catalog)
    }

    /// Validates id uniqueness and score range before accepting the records.
    pub fn from_listings(listings: Vec<JobListing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(&listing.id) {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
            if listing.match_score > MAX_MATCH_SCORE {
                return Err(CatalogError::MatchScoreOutOfRange {
                    id: listing.id.clone(),
                    score: listing.match_score,
                });
            }
        }

        let facets = ListingFacets::from_listings(&listings);
        Ok(Self { listings, facets })
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &JobId) -> Option<&JobListing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    pub fn facets(&self) -> &ListingFacets {
        &self.facets
    }

    pub fn search(&self, criteria: &FilterCriteria) -> ListingSearch {
        let search = ListingSearch::run(&self.listings, criteria);
        debug!(
            search = %criteria.search_term,
            sort = ?criteria.sort_key,
            matched = search.total,
            "listing query evaluated"
        );
        search
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("duplicate job id '{0}'")]
    DuplicateId(JobId),
    #[error("job '{id}' has match score {score}, expected 0-100")]
    MatchScoreOutOfRange { id: JobId, score: u8 },
}
