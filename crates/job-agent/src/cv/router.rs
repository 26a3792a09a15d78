use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::analysis::AnalysisError;
use super::document::{CvDocument, DocumentKind, UploadError};
use super::service::CvService;

const FILE_FIELD: &str = "file";
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Debug, Serialize)]
pub struct AcceptedFormat {
    pub kind: DocumentKind,
    pub label: &'static str,
    pub extension: &'static str,
    pub mime: String,
}

#[derive(Debug, Serialize)]
pub struct UploadPolicyView {
    pub accepted: Vec<AcceptedFormat>,
    pub max_bytes: u64,
    pub description: String,
}

/// Router builder exposing CV upload and analysis endpoints.
pub fn cv_router(service: Arc<CvService>) -> Router {
    let body_limit = usize::try_from(service.policy().max_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/api/v1/cv/policy", get(policy_handler))
        .route(
            "/api/v1/cv/analyze",
            post(analyze_handler).layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(service)
}

pub(crate) async fn policy_handler(State(service): State<Arc<CvService>>) -> Json<UploadPolicyView> {
    let policy = service.policy();
    let accepted = DocumentKind::ALL
        .into_iter()
        .map(|kind| AcceptedFormat {
            kind,
            label: kind.label(),
            extension: kind.extension(),
            mime: kind.mime().to_string(),
        })
        .collect();

    Json(UploadPolicyView {
        accepted,
        max_bytes: policy.max_bytes,
        description: policy.describe(),
    })
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<CvService>>,
    mut multipart: Multipart,
) -> Response {
    let document = match read_document(&mut multipart).await {
        Ok(Some(document)) => document,
        Ok(None) => {
            let payload = json!({
                "error": format!("multipart field '{FILE_FIELD}' is required"),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
        Err(error) => {
            let payload = json!({ "error": error.body_text() });
            return (error.status(), Json(payload)).into_response();
        }
    };

    match service.analyze(document).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => {
            let status = match &error {
                AnalysisError::Rejected(UploadError::UnsupportedType { .. }) => {
                    StatusCode::UNSUPPORTED_MEDIA_TYPE
                }
                AnalysisError::Rejected(UploadError::TooLarge { .. }) => {
                    StatusCode::PAYLOAD_TOO_LARGE
                }
                AnalysisError::Rejected(UploadError::Empty { .. }) => StatusCode::BAD_REQUEST,
                AnalysisError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
                AnalysisError::Provider(_) => StatusCode::BAD_GATEWAY,
            };
            let payload = json!({ "error": error.to_string() });
            (status, Json(payload)).into_response()
        }
    }
}

/// Reads the first `file` field; other fields are skipped.
async fn read_document(
    multipart: &mut Multipart,
) -> Result<Option<CvDocument>, axum::extract::multipart::MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        return Ok(Some(CvDocument::new(file_name, content_type, bytes.to_vec())));
    }

    Ok(None)
}
