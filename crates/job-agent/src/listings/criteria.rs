use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    MatchScore,
    PostedDate,
    Salary,
}

impl SortKey {
    pub const fn label(self) -> &'static str {
        match self {
            SortKey::MatchScore => "Match Score",
            SortKey::PostedDate => "Date Posted",
            SortKey::Salary => "Salary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}' (expected match_score, posted_date, or salary)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "" | "match_score" => Ok(SortKey::MatchScore),
            "posted_date" => Ok(SortKey::PostedDate),
            "salary" => Ok(SortKey::Salary),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

/// User-selected criteria for one listing query.
///
/// Empty strings in the optional filters behave exactly like `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub sort_key: SortKey,
    /// Anchor for relative posting ages such as "2 days ago".
    pub as_of: NaiveDate,
}

impl FilterCriteria {
    /// Criteria that match every listing, ordered by match score.
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            search_term: String::new(),
            location: None,
            job_type: None,
            experience: None,
            sort_key: SortKey::default(),
            as_of,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    pub fn experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn sort_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub(crate) fn location_filter(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub(crate) fn job_type_filter(&self) -> Option<&str> {
        non_empty(&self.job_type)
    }

    pub(crate) fn experience_filter(&self) -> Option<&str> {
        non_empty(&self.experience)
    }

    /// True when no predicate excludes anything.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.location_filter().is_none()
            && self.job_type_filter().is_none()
            && self.experience_filter().is_none()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid date")
    }

    #[test]
    fn sort_key_uses_the_snake_case_wire_names() {
        assert_eq!("posted_date".parse::<SortKey>(), Ok(SortKey::PostedDate));
        assert_eq!("match_score".parse::<SortKey>(), Ok(SortKey::MatchScore));
        assert_eq!("".parse::<SortKey>(), Ok(SortKey::MatchScore));
        assert_eq!(
            "newest".parse::<SortKey>(),
            Err(UnknownSortKey("newest".to_string()))
        );
        assert_eq!(
            "matchScore".parse::<SortKey>(),
            Err(UnknownSortKey("matchScore".to_string()))
        );

        let key: SortKey = serde_json::from_str("\"posted_date\"").expect("key deserializes");
        assert_eq!(key, SortKey::PostedDate);
        assert!(serde_json::from_str::<SortKey>("\"postedDate\"").is_err());
        assert_eq!(
            serde_json::to_string(&SortKey::MatchScore).expect("key serializes"),
            "\"match_score\""
        );
    }

    #[test]
    fn empty_filters_count_as_absent() {
        let criteria = FilterCriteria::new(as_of()).location("").job_type("");
        assert!(criteria.is_unfiltered());

        let criteria = criteria.experience("3-5 years");
        assert!(!criteria.is_unfiltered());
    }
}
