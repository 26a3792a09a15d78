use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::document::{CvDocument, UploadError};

/// Profile extracted from a CV by an analysis provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvAnalysis {
    pub skills: Vec<String>,
    pub experience_level: String,
    pub industries: Vec<String>,
    pub match_score: u8,
    pub suggested_roles: Vec<String>,
}

/// CV-analysis provider seam.
#[async_trait]
pub trait CvAnalyzer: Send + Sync {
    async fn analyze(&self, document: &CvDocument) -> Result<CvAnalysis, AnalysisError>;

    /// Backend name surfaced in responses, e.g. `"mock"`.
    fn backend(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Rejected(#[from] UploadError),
    #[error("analysis was cancelled before it completed")]
    Cancelled,
    #[error("analysis provider failed: {0}")]
    Provider(String),
}

pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_secs(3);

/// Stand-in provider: waits a fixed delay, then reports the same profile for
/// every document. The document content is never read.
#[derive(Debug, Clone)]
pub struct MockCvAnalyzer {
    delay: Duration,
}

impl Default for MockCvAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_ANALYSIS_DELAY)
    }
}

impl MockCvAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn canned_analysis() -> CvAnalysis {
        CvAnalysis {
            skills: strings(&["JavaScript", "React", "Node.js", "Python", "MongoDB"]),
            experience_level: "3-5 years".to_string(),
            industries: strings(&["Technology", "Software Development"]),
            match_score: 95,
            suggested_roles: strings(&[
                "Frontend Developer",
                "Full Stack Developer",
                "React Developer",
            ]),
        }
    }
}

#[async_trait]
impl CvAnalyzer for MockCvAnalyzer {
    async fn analyze(&self, _document: &CvDocument) -> Result<CvAnalysis, AnalysisError> {
        tokio::time::sleep(self.delay).await;
        Ok(Self::canned_analysis())
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn mock_waits_for_the_configured_delay() {
        let analyzer = MockCvAnalyzer::default();
        let document = CvDocument::new("cv.pdf", None, b"%PDF".to_vec());

        let started = tokio::time::Instant::now();
        let analysis = analyzer.analyze(&document).await.expect("mock succeeds");

        assert!(started.elapsed() >= DEFAULT_ANALYSIS_DELAY);
        assert_eq!(analysis, MockCvAnalyzer::canned_analysis());
        assert_eq!(analysis.match_score, 95);
        assert_eq!(analysis.experience_level, "3-5 years");
    }

    #[tokio::test(start_paused = true)]
    async fn mock_ignores_document_content() {
        let analyzer = MockCvAnalyzer::new(Duration::from_millis(10));
        let first = analyzer
            .analyze(&CvDocument::new("a.txt", None, b"Rust engineer".to_vec()))
            .await
            .expect("mock succeeds");
        let second = analyzer
            .analyze(&CvDocument::new("b.txt", None, b"Pastry chef".to_vec()))
            .await
            .expect("mock succeeds");
        assert_eq!(first, second);
    }
}
