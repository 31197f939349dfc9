pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::import::handlers;
use crate::state::AppState;

/// Headroom above the file limit for multipart boundaries and part headers,
/// so an oversized file is reported by the size check rather than the raw
/// body limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume/extract", post(handlers::handle_extract))
        .route("/api/v1/resume/import", post(handlers::handle_import))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::import::pdf::{PdfDecoder, PdfTextExtractor, StreamScrapeExtractor};

    const BOUNDARY: &str = "portal-test-boundary";

    const RESUME_TEXT: &str = "JANE DOE\n\
        jane.doe@example.com | +91 9876543210\n\
        \n\
        Experience\n\
        Backend Engineer at Acme Corp - 2019-2023\n\
        \n\
        Skills\n\
        Rust, PostgreSQL, Docker\n";

    fn test_router(config: Config) -> Router {
        let backends: Vec<Box<dyn PdfTextExtractor>> = vec![Box::new(StreamScrapeExtractor)];
        let pdf_decoder = PdfDecoder::new(backends, config.min_pdf_text_chars);
        build_router(AppState {
            config,
            pdf_decoder: Arc::new(pdf_decoder),
        })
    }

    fn upload(file_name: &str, content_type: &str, contents: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/resume/import")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn extract_request(payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/resume/extract")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(test_router(Config::default()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "career-portal-api");
        assert_eq!(body["pdf_backends"], json!(["stream_scrape"]));
    }

    #[tokio::test]
    async fn test_extract_manual_text() {
        let (status, body) = send(
            test_router(Config::default()),
            extract_request(json!({ "text": RESUME_TEXT })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"]["kind"], "manual");
        assert_eq!(body["source"]["decoder"], "manual");
        assert_eq!(body["resume"]["personalInfo"]["name"], "Jane Doe");
        assert_eq!(body["resume"]["personalInfo"]["email"], "jane.doe@example.com");
        assert_eq!(body["resume"]["experience"][0]["company"], "Acme Corp");
        assert_eq!(body["preview"]["skill_count"], 3);
        assert_eq!(body["extracted_text"], RESUME_TEXT);
        assert!(body["import_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_extract_blank_text_is_rejected() {
        let (status, body) = send(
            test_router(Config::default()),
            extract_request(json!({ "text": "   \n " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Please enter some text to process");
    }

    #[tokio::test]
    async fn test_import_text_file() {
        let (status, body) = send(
            test_router(Config::default()),
            upload("resume.txt", "text/plain", RESUME_TEXT.as_bytes()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"]["kind"], "plain_text");
        assert_eq!(body["source"]["file_name"], "resume.txt");
        assert_eq!(body["source"]["decoder"], "utf8_lossy");
        assert_eq!(body["source"]["byte_len"], RESUME_TEXT.len());
        assert_eq!(body["resume"]["personalInfo"]["phone"], "+91 9876543210");
        assert_eq!(body["preview"]["email_found"], true);
    }

    #[tokio::test]
    async fn test_import_pdf_through_scrape_backend() {
        let pdf = format!("%PDF-1.4\n1 0 obj\nstream\n{RESUME_TEXT}endstream\nendobj\n");
        let (status, body) = send(
            test_router(Config::default()),
            upload("resume.pdf", "application/pdf", pdf.as_bytes()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"]["kind"], "pdf");
        assert_eq!(body["source"]["decoder"], "stream_scrape");
        assert_eq!(body["resume"]["personalInfo"]["email"], "jane.doe@example.com");
    }

    #[tokio::test]
    async fn test_import_unreadable_pdf() {
        let (status, body) = send(
            test_router(Config::default()),
            upload("resume.pdf", "application/pdf", b"%PDF-1.4 tiny"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["message"],
            "PDF parsing failed. Please try converting to text file or use manual entry."
        );
    }

    #[tokio::test]
    async fn test_import_unsupported_type() {
        let (status, body) = send(
            test_router(Config::default()),
            upload("resume.docx", "application/msword", b"binary"),
        )
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_import_oversized_file() {
        let config = Config {
            max_upload_bytes: 64,
            ..Config::default()
        };
        let (status, body) = send(
            test_router(config),
            upload("resume.txt", "text/plain", &[b'a'; 65]),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_import_text_too_short() {
        let (status, body) = send(
            test_router(Config::default()),
            upload("resume.txt", "text/plain", b"  hi  "),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["message"],
            "No readable text found in file. Please check the file format."
        );
    }

    #[tokio::test]
    async fn test_import_without_file_field() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resume/import")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        let (status, body) = send(test_router(Config::default()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
