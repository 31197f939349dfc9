use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::import::decode::{
    check_size, decode_plain_text, require_manual_text, require_readable, DecodedText, ImportKind,
    UNSUPPORTED_FILE_MESSAGE,
};
use crate::resume::{extract, ExtractedResume, ExtractionPreview};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// Where the extracted text came from.
#[derive(Debug, Serialize)]
pub struct ImportSource {
    pub kind: ImportKind,
    pub file_name: Option<String>,
    pub decoder: &'static str,
    pub byte_len: usize,
    pub text_len: usize,
}

/// Extraction result returned for user confirmation. Nothing is stored.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub import_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub source: ImportSource,
    pub extracted_text: String,
    pub resume: ExtractedResume,
    pub preview: ExtractionPreview,
}

/// POST /api/v1/resume/extract
pub async fn handle_extract(
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ImportResponse>, AppError> {
    require_manual_text(&req.text)?;

    let byte_len = req.text.len();
    let decoded = DecodedText {
        text: req.text,
        decoder: "manual",
    };
    let response = build_response(ImportKind::Manual, None, byte_len, decoded).await?;
    Ok(Json(response))
}

/// POST /api/v1/resume/import
///
/// Multipart upload with the resume in field `file` (PDF or plain text).
pub async fn handle_import(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let kind = ImportKind::detect(content_type.as_deref(), file_name.as_deref())
            .ok_or_else(|| {
                warn!(?file_name, ?content_type, "Rejected unsupported upload");
                AppError::UnsupportedMediaType(UNSUPPORTED_FILE_MESSAGE.to_string())
            })?;

        let bytes = field.bytes().await?;
        check_size(bytes.len(), state.config.max_upload_bytes)?;
        info!(?kind, ?file_name, byte_len = bytes.len(), "Resume upload received");

        let byte_len = bytes.len();
        let decoded = match kind {
            ImportKind::Pdf => {
                let name = file_name.as_deref().unwrap_or("resume.pdf");
                state.pdf_decoder.decode(bytes, name).await?
            }
            _ => decode_plain_text(&bytes),
        };
        require_readable(&decoded.text, state.config.min_text_chars)?;

        let response = build_response(kind, file_name, byte_len, decoded).await?;
        return Ok(Json(response));
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}

async fn build_response(
    kind: ImportKind,
    file_name: Option<String>,
    byte_len: usize,
    decoded: DecodedText,
) -> Result<ImportResponse, AppError> {
    let DecodedText { text, decoder } = decoded;

    // Pattern scanning is CPU-bound; keep it off the async executor.
    let (text, resume) = tokio::task::spawn_blocking(move || {
        let resume = extract(&text);
        (text, resume)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))?;

    let preview = resume.preview();
    if resume.is_empty() {
        warn!(decoder, "No resume fields recovered; manual entry needed");
    }

    let response = ImportResponse {
        import_id: Uuid::new_v4(),
        received_at: Utc::now(),
        source: ImportSource {
            kind,
            file_name,
            decoder,
            byte_len,
            text_len: text.chars().count(),
        },
        extracted_text: text,
        resume,
        preview,
    };

    info!(
        import_id = %response.import_id,
        decoder,
        skills = response.preview.skill_count,
        experience = response.preview.experience_count,
        "Resume import extracted"
    );
    Ok(response)
}
