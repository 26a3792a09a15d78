//! CV upload acceptance, the analysis provider seam, and the upload flow.

pub mod analysis;
pub mod document;
pub mod router;
pub mod service;
pub mod task;
pub mod upload;

pub use analysis::{AnalysisError, CvAnalysis, CvAnalyzer, MockCvAnalyzer, DEFAULT_ANALYSIS_DELAY};
pub use document::{CvDocument, DocumentKind, UploadError, UploadPolicy, DEFAULT_MAX_UPLOAD_BYTES};
pub use router::cv_router;
pub use service::{CvAnalysisReport, CvService};
pub use task::AnalysisTask;
pub use upload::{UploadSession, UploadStage, UploadTransitionError};
