//! PDF text extraction.
//!
//! `PdfDecoder` runs an ordered chain of [`PdfTextExtractor`] backends and
//! keeps the first result with enough text. A failing backend is logged and
//! the next one tried; only when every backend fails does the import fail.

use std::sync::LazyLock;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use regex::Regex;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::import::decode::{DecodedText, PDF_PARSE_FAILED_MESSAGE};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PDF service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("Decoder task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// One way of turning PDF bytes into text.
#[async_trait]
pub trait PdfTextExtractor: Send + Sync {
    /// Short identifier reported back to the client as the decoder used.
    fn name(&self) -> &'static str;

    async fn extract_text(&self, bytes: &Bytes, file_name: &str) -> Result<String, DecodeError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RemotePdfService: external extraction endpoint, tried first when configured
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PdfServiceReply {
    #[serde(default)]
    text: String,
}

/// Posts the file as multipart field `file` and reads `{ "text": ... }` back.
pub struct RemotePdfService {
    client: Client,
    url: String,
}

impl RemotePdfService {
    pub fn new(url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build PDF service HTTP client")?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl PdfTextExtractor for RemotePdfService {
    fn name(&self) -> &'static str {
        "remote_service"
    }

    async fn extract_text(&self, bytes: &Bytes, file_name: &str) -> Result<String, DecodeError> {
        let form = Form::new().part(
            "file",
            Part::bytes(bytes.to_vec())
                .file_name(file_name.to_string())
                .mime_str("application/pdf")?,
        );

        let response = self.client.post(&self.url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DecodeError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let reply: PdfServiceReply = response.json().await?;
        Ok(reply.text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// EmbeddedPdfExtractor: in-process parser
// ────────────────────────────────────────────────────────────────────────────

/// Parses the document with `pdf-extract`. Parsing is CPU-bound and may panic
/// on malformed input, so it runs on the blocking pool.
pub struct EmbeddedPdfExtractor;

#[async_trait]
impl PdfTextExtractor for EmbeddedPdfExtractor {
    fn name(&self) -> &'static str {
        "pdf_extract"
    }

    async fn extract_text(&self, bytes: &Bytes, _file_name: &str) -> Result<String, DecodeError> {
        let bytes = bytes.clone();
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
        })
        .await?
        .map_err(DecodeError::Pdf)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StreamScrapeExtractor: last resort over the raw bytes
// ────────────────────────────────────────────────────────────────────────────

static RE_STREAM_BODY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)stream\s*(.*?)\s*endstream").ok());

/// Reads the file as lossy UTF-8 and keeps the bodies of `stream ... endstream`
/// blocks. Without any such block, keeps only printable ASCII.
pub struct StreamScrapeExtractor;

impl StreamScrapeExtractor {
    fn scrape(bytes: &[u8]) -> String {
        let raw = String::from_utf8_lossy(bytes);

        let bodies: Vec<&str> = RE_STREAM_BODY
            .as_ref()
            .map(|re| {
                re.captures_iter(&raw)
                    .filter_map(|c| c.get(1))
                    .map(|m| m.as_str())
                    .collect()
            })
            .unwrap_or_default();

        if !bodies.is_empty() {
            return bodies.join(" ").trim().to_string();
        }

        let printable: String = raw
            .chars()
            .map(|c| {
                if c == '\n' || c == '\r' || (' '..='~').contains(&c) {
                    c
                } else {
                    ' '
                }
            })
            .collect();
        printable.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[async_trait]
impl PdfTextExtractor for StreamScrapeExtractor {
    fn name(&self) -> &'static str {
        "stream_scrape"
    }

    async fn extract_text(&self, bytes: &Bytes, _file_name: &str) -> Result<String, DecodeError> {
        Ok(Self::scrape(bytes))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PdfDecoder: the fallback chain
// ────────────────────────────────────────────────────────────────────────────

pub struct PdfDecoder {
    backends: Vec<Box<dyn PdfTextExtractor>>,
    min_chars: usize,
}

impl PdfDecoder {
    pub fn new(backends: Vec<Box<dyn PdfTextExtractor>>, min_chars: usize) -> Self {
        Self {
            backends,
            min_chars,
        }
    }

    /// Remote service (when configured), then the embedded parser, then the
    /// raw scrape.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut backends: Vec<Box<dyn PdfTextExtractor>> = Vec::new();
        if let Some(url) = &config.pdf_service_url {
            backends.push(Box::new(RemotePdfService::new(
                url.clone(),
                Duration::from_secs(config.pdf_service_timeout_secs),
            )?));
        }
        backends.push(Box::new(EmbeddedPdfExtractor));
        backends.push(Box::new(StreamScrapeExtractor));
        Ok(Self::new(backends, config.min_pdf_text_chars))
    }

    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Tries each backend in order and returns the first text with at least
    /// `min_chars` characters once trimmed. The remote service is held to the same
    /// minimum as the local parsers; short text falls through to the next backend.
    pub async fn decode(&self, bytes: Bytes, file_name: &str) -> Result<DecodedText, AppError> {
        for backend in &self.backends {
            match backend.extract_text(&bytes, file_name).await {
                Ok(text) => {
                    let chars = text.trim().chars().count();
                    if chars >= self.min_chars {
                        info!(backend = backend.name(), chars, "PDF text extracted");
                        return Ok(DecodedText {
                            text,
                            decoder: backend.name(),
                        });
                    }
                    debug!(
                        backend = backend.name(),
                        chars,
                        min = self.min_chars,
                        "PDF backend returned too little text"
                    );
                }
                Err(e) => {
                    warn!(backend = backend.name(), error = %e, "PDF backend failed");
                }
            }
        }

        warn!(file_name, "All PDF backends failed");
        Err(AppError::UnprocessableEntity(
            PDF_PARSE_FAILED_MESSAGE.to_string(),
        ))
    }
}
