//! Job listing catalog: domain records, the filter/sort engine, facets, and
//! the job-data provider seam.

pub mod catalog;
pub mod criteria;
pub mod domain;
pub mod engine;
pub mod facets;
pub mod fixtures;
pub(crate) mod import;
pub mod posted;
pub mod router;
pub mod salary;
pub mod source;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, JobCatalog};
pub use criteria::{FilterCriteria, SortKey, UnknownSortKey};
pub use domain::{JobId, JobListing};
pub use engine::{filter_and_sort, matches, EmptyState, ListingSearch};
pub use facets::ListingFacets;
pub use fixtures::mock_jobs;
pub use posted::PostedDate;
pub use router::{jobs_router, ListingQuery, ListingSearchResponse};
pub use salary::{Currency, SalaryRange};
pub use source::{CsvJobSource, FixtureJobSource, JobSource, SourceError};
