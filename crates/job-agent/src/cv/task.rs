use std::sync::Arc;

use tokio::task::JoinHandle;

use super::analysis::{AnalysisError, CvAnalysis, CvAnalyzer};
use super::document::CvDocument;

/// One in-flight analysis. Dropping the task aborts the provider call.
pub struct AnalysisTask {
    handle: JoinHandle<Result<CvAnalysis, AnalysisError>>,
}

impl AnalysisTask {
    pub fn spawn(analyzer: Arc<dyn CvAnalyzer>, document: CvDocument) -> Self {
        let handle = tokio::spawn(async move { analyzer.analyze(&document).await });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn outcome(mut self) -> Result<CvAnalysis, AnalysisError> {
        match (&mut self.handle).await {
            Ok(result) => result,
            Err(error) if error.is_cancelled() => Err(AnalysisError::Cancelled),
            Err(error) => Err(AnalysisError::Provider(format!(
                "analysis task failed: {error}"
            ))),
        }
    }
}

impl Drop for AnalysisTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
