use std::io::Read;
use std::path::{Path, PathBuf};

use super::domain::JobListing;
use super::fixtures::mock_jobs;
use super::import::parse_listings;

/// Job-data provider seam. Implementations hand back the full collection.
pub trait JobSource: Send + Sync {
    fn list_jobs(&self) -> Result<Vec<JobListing>, SourceError>;

    /// Short label for logs and CLI output.
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read job export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid job CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("job source unavailable: {0}")]
    Unavailable(String),
}

/// Serves the built-in five-record fixture.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureJobSource;

impl JobSource for FixtureJobSource {
    fn list_jobs(&self) -> Result<Vec<JobListing>, SourceError> {
        Ok(mock_jobs())
    }

    fn describe(&self) -> String {
        "built-in fixture".to_string()
    }
}

/// Reads listings from a CSV export on disk each time it is asked.
#[derive(Debug, Clone)]
pub struct CsvJobSource {
    path: PathBuf,
}

impl CsvJobSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<JobListing>, SourceError> {
        Ok(parse_listings(reader)?)
    }
}

impl JobSource for CsvJobSource {
    fn list_jobs(&self) -> Result<Vec<JobListing>, SourceError> {
        let file = std::fs::File::open(&self.path)?;
        Self::from_reader(file)
    }

    fn describe(&self) -> String {
        format!("CSV export {}", self.path.display())
    }
}
