use super::common::*;
use crate::listings::{
    CatalogError, CsvJobSource, FixtureJobSource, JobCatalog, JobId, JobListing, JobSource,
    SourceError,
};

struct BrokenSource;

impl JobSource for BrokenSource {
    fn list_jobs(&self) -> Result<Vec<JobListing>, SourceError> {
        Err(SourceError::Unavailable("listing service offline".to_string()))
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}

#[test]
fn loads_fixture_catalog() {
    let catalog = JobCatalog::load(&FixtureJobSource).expect("fixture loads");
    assert_eq!(catalog.len(), 5);
    assert_eq!(
        catalog.get(&JobId::new("3")).map(|job| job.title.as_str()),
        Some("DevOps Engineer")
    );
    assert!(catalog.get(&JobId::new("99")).is_none());
    assert_eq!(catalog.facets().locations.len(), 5);
}

#[test]
fn rejects_duplicate_ids() {
    let listings = vec![
        listing("dup", 50, "$1k", "today"),
        listing("dup", 60, "$2k", "today"),
    ];
    match JobCatalog::from_listings(listings) {
        Err(CatalogError::DuplicateId(id)) => assert_eq!(id, JobId::new("dup")),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn rejects_scores_above_one_hundred() {
    let listings = vec![listing("hot", 101, "$1k", "today")];
    assert!(matches!(
        JobCatalog::from_listings(listings),
        Err(CatalogError::MatchScoreOutOfRange { score: 101, .. })
    ));
}

#[test]
fn propagates_source_failures() {
    match JobCatalog::load(&BrokenSource) {
        Err(CatalogError::Source(SourceError::Unavailable(reason))) => {
            assert!(reason.contains("offline"))
        }
        other => panic!("expected source failure, got {other:?}"),
    }
}

#[test]
fn csv_source_reports_missing_files() {
    let source = CsvJobSource::new("/definitely/not/here/jobs.csv");
    assert!(matches!(source.list_jobs(), Err(SourceError::Io(_))));
    assert!(source.describe().contains("jobs.csv"));
}

#[test]
fn catalog_search_applies_engine() {
    let catalog = JobCatalog::load(&FixtureJobSource).expect("fixture loads");
    let search = catalog.search(&criteria().search("aws"));
    assert_eq!(ids(&search.jobs), vec!["1", "3"]);
}
