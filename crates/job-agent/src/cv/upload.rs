use super::analysis::{AnalysisError, CvAnalysis};
use super::document::{CvDocument, DocumentKind, UploadError, UploadPolicy};

/// Where a single-file upload currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStage {
    Empty,
    Selected,
    Analyzing,
    Complete(CvAnalysis),
    Failed(String),
}

impl UploadStage {
    pub const fn label(&self) -> &'static str {
        match self {
            UploadStage::Empty => "empty",
            UploadStage::Selected => "selected",
            UploadStage::Analyzing => "analyzing",
            UploadStage::Complete(_) => "complete",
            UploadStage::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadTransitionError {
    #[error(transparent)]
    Rejected(#[from] UploadError),
    #[error("no CV has been selected")]
    NoDocument,
    #[error("cannot {action} while the upload is {stage}")]
    InvalidStage {
        action: &'static str,
        stage: &'static str,
    },
}

/// Upload form state: at most one document, plus the analysis progress for it.
#[derive(Debug, Clone)]
pub struct UploadSession {
    policy: UploadPolicy,
    document: Option<(CvDocument, DocumentKind)>,
    stage: UploadStage,
}

impl UploadSession {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            document: None,
            stage: UploadStage::Empty,
        }
    }

    pub fn stage(&self) -> &UploadStage {
        &self.stage
    }

    pub fn document(&self) -> Option<&CvDocument> {
        self.document.as_ref().map(|(document, _)| document)
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        self.document.as_ref().map(|(_, kind)| *kind)
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.stage, UploadStage::Analyzing)
    }

    pub fn analysis_complete(&self) -> bool {
        matches!(self.stage, UploadStage::Complete(_))
    }

    pub fn analysis(&self) -> Option<&CvAnalysis> {
        match &self.stage {
            UploadStage::Complete(analysis) => Some(analysis),
            _ => None,
        }
    }

    /// Accepts a document, replacing any previous one and its results.
    pub fn select(&mut self, document: CvDocument) -> Result<DocumentKind, UploadTransitionError> {
        self.ensure_not_analyzing("select a new CV")?;
        let kind = self.policy.validate(&document)?;
        self.document = Some((document, kind));
        self.stage = UploadStage::Selected;
        Ok(kind)
    }

    /// Hands out the document to analyse and marks the session busy.
    pub fn begin_analysis(&mut self) -> Result<CvDocument, UploadTransitionError> {
        let document = self
            .document
            .as_ref()
            .map(|(document, _)| document.clone())
            .ok_or(UploadTransitionError::NoDocument)?;

        match self.stage {
            UploadStage::Selected | UploadStage::Failed(_) => {
                self.stage = UploadStage::Analyzing;
                Ok(document)
            }
            _ => Err(self.invalid("start analysis")),
        }
    }

    pub fn finish(
        &mut self,
        outcome: Result<CvAnalysis, AnalysisError>,
    ) -> Result<(), UploadTransitionError> {
        if !self.is_analyzing() {
            return Err(self.invalid("record an analysis result"));
        }
        self.stage = match outcome {
            Ok(analysis) => UploadStage::Complete(analysis),
            Err(AnalysisError::Cancelled) => UploadStage::Selected,
            Err(error) => UploadStage::Failed(error.to_string()),
        };
        Ok(())
    }

    /// Drops the document and any results.
    pub fn remove(&mut self) {
        self.document = None;
        self.stage = UploadStage::Empty;
    }

    /// "Upload another CV".
    pub fn reset(&mut self) {
        self.remove();
    }

    fn ensure_not_analyzing(&self, action: &'static str) -> Result<(), UploadTransitionError> {
        if self.is_analyzing() {
            Err(self.invalid(action))
        } else {
            Ok(())
        }
    }

    fn invalid(&self, action: &'static str) -> UploadTransitionError {
        UploadTransitionError::InvalidStage {
            action,
            stage: self.stage.label(),
        }
    }
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new(UploadPolicy::default())
    }
}
