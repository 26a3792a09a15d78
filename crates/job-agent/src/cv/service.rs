use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use super::analysis::{AnalysisError, CvAnalysis, CvAnalyzer};
use super::document::{CvDocument, DocumentKind, UploadPolicy};
use super::task::AnalysisTask;

/// Validates uploads and runs them through the configured analysis provider.
pub struct CvService {
    analyzer: Arc<dyn CvAnalyzer>,
    policy: UploadPolicy,
}

/// Analysis result together with the document facts shown next to it.
#[derive(Debug, Clone, Serialize)]
pub struct CvAnalysisReport {
    pub file_name: String,
    pub kind: DocumentKind,
    pub size_label: String,
    pub backend: &'static str,
    pub analysis: CvAnalysis,
}

impl CvService {
    pub fn new(analyzer: Arc<dyn CvAnalyzer>, policy: UploadPolicy) -> Self {
        Self { analyzer, policy }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    pub fn backend(&self) -> &'static str {
        self.analyzer.backend()
    }

    /// Starts an analysis without waiting for it; the caller owns cancellation.
    pub fn start(&self, document: CvDocument) -> Result<AnalysisTask, AnalysisError> {
        self.policy.validate(&document)?;
        Ok(AnalysisTask::spawn(self.analyzer.clone(), document))
    }

    pub async fn analyze(&self, document: CvDocument) -> Result<CvAnalysisReport, AnalysisError> {
        let kind = self.policy.validate(&document)?;
        let file_name = document.file_name.clone();
        let size_label = document.size_label();
        let started = Instant::now();

        let outcome = AnalysisTask::spawn(self.analyzer.clone(), document)
            .outcome()
            .await;

        match outcome {
            Ok(analysis) => {
                info!(
                    file = %file_name,
                    kind = kind.label(),
                    backend = self.backend(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "cv analysis complete"
                );
                Ok(CvAnalysisReport {
                    file_name,
                    kind,
                    size_label,
                    backend: self.backend(),
                    analysis,
                })
            }
            Err(error) => {
                warn!(file = %file_name, %error, "cv analysis failed");
                Err(error)
            }
        }
    }
}
