use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use job_agent::cv::{cv_router, CvService, MockCvAnalyzer, UploadPolicy};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const BOUNDARY: &str = "cv-upload-boundary";

fn router(max_bytes: u64) -> axum::Router {
    let service = CvService::new(
        Arc::new(MockCvAnalyzer::new(Duration::from_millis(5))),
        UploadPolicy::new(max_bytes),
    );
    cv_router(Arc::new(service))
}

fn multipart(field: &str, file_name: &str, content_type: &str, content: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::post("/api/v1/cv/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request builds")
}

async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    (status, serde_json::from_slice(&bytes).expect("valid json"))
}

#[tokio::test]
async fn analyses_an_accepted_cv() {
    let request = multipart("file", "resume.pdf", "application/pdf", b"%PDF-1.7 resume");
    let (status, body) = send(router(1024), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["file_name"], "resume.pdf");
    assert_eq!(body["kind"], "pdf");
    assert_eq!(body["backend"], "mock");
    assert_eq!(body["analysis"]["match_score"], 95);
    assert_eq!(body["analysis"]["experience_level"], "3-5 years");
    assert_eq!(body["analysis"]["suggested_roles"][0], "Frontend Developer");
}

#[tokio::test]
async fn rejects_unsupported_formats() {
    let request = multipart("file", "avatar.png", "image/png", b"\x89PNG");
    let (status, body) = send(router(1024), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body["error"].as_str().expect("error text").contains("avatar.png"));
}

#[tokio::test]
async fn rejects_documents_over_the_limit() {
    let request = multipart("file", "resume.txt", "text/plain", &[b'x'; 2048]);
    let (status, _) = send(router(1024), request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn rejects_empty_documents_and_missing_fields() {
    let request = multipart("file", "resume.docx", "application/octet-stream", b"");
    let (status, _) = send(router(1024), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = multipart("attachment", "resume.pdf", "application/pdf", b"%PDF");
    let (status, body) = send(router(1024), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error text").contains("file"));
}

#[tokio::test]
async fn policy_lists_accepted_formats() {
    let request = Request::get("/api/v1/cv/policy")
        .body(Body::empty())
        .expect("request builds");
    let (status, body) = send(router(10 * 1024 * 1024), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["max_bytes"], 10 * 1024 * 1024);
    assert_eq!(body["accepted"].as_array().map(Vec::len), Some(4));
    assert_eq!(
        body["description"],
        "Supports PDF, DOC, DOCX, and TEXT files (max 10MB)"
    );
}
