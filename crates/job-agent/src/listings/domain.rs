use serde::{Deserialize, Serialize};

use super::posted::PostedDate;
use super::salary::SalaryRange;

/// Identifier wrapper for published listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single job opportunity as supplied by the job-data provider.
///
/// `salary` and `posted_date` stay display strings; structured views are
/// derived on demand through [`JobListing::salary_range`] and
/// [`JobListing::posted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub match_score: u8,
    pub posted_date: String,
    pub description: String,
    pub is_remote: bool,
}

impl JobListing {
    pub fn salary_range(&self) -> Option<SalaryRange> {
        SalaryRange::parse(&self.salary)
    }

    pub fn posted(&self) -> PostedDate {
        PostedDate::parse(&self.posted_date)
    }

    /// City portion of the location ("Austin" for "Austin, TX").
    pub fn city(&self) -> &str {
        self.location
            .split(',')
            .next()
            .unwrap_or(self.location.as_str())
    }
}
