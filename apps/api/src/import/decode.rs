//! Upload classification and the text gates every import passes through.

use serde::Serialize;

use crate::errors::AppError;

pub const UNSUPPORTED_FILE_MESSAGE: &str = "Invalid file type. Please upload a PDF or TXT file.";
pub const EMPTY_MANUAL_ENTRY_MESSAGE: &str = "Please enter some text to process";
pub const NO_READABLE_TEXT_MESSAGE: &str =
    "No readable text found in file. Please check the file format.";
pub const PDF_PARSE_FAILED_MESSAGE: &str =
    "PDF parsing failed. Please try converting to text file or use manual entry.";

const MIB: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    Pdf,
    PlainText,
    /// Text typed or pasted by the user rather than uploaded.
    Manual,
}

impl ImportKind {
    /// Classifies an upload by content type or file extension.
    ///
    /// Either signal is enough. PDF wins when both are present and disagree,
    /// since a mislabelled PDF decoded as text is useless.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .unwrap_or_default();
        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if mime == "application/pdf" || extension == "pdf" {
            Some(ImportKind::Pdf)
        } else if mime == "text/plain" || extension == "txt" {
            Some(ImportKind::PlainText)
        } else {
            None
        }
    }
}

/// Text recovered from an upload, tagged with the decoder that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub decoder: &'static str,
}

pub fn check_size(byte_len: usize, limit: usize) -> Result<(), AppError> {
    if byte_len > limit {
        return Err(AppError::PayloadTooLarge(format!(
            "File size must be less than {}",
            describe_limit(limit)
        )));
    }
    Ok(())
}

fn describe_limit(limit: usize) -> String {
    if limit >= MIB && limit % MIB == 0 {
        format!("{}MB", limit / MIB)
    } else {
        format!("{limit} bytes")
    }
}

/// Invalid UTF-8 sequences become U+FFFD instead of failing the import.
pub fn decode_plain_text(bytes: &[u8]) -> DecodedText {
    DecodedText {
        text: String::from_utf8_lossy(bytes).into_owned(),
        decoder: "utf8_lossy",
    }
}

/// Rejects decoded text with fewer than `min_chars` characters once trimmed.
pub fn require_readable(text: &str, min_chars: usize) -> Result<(), AppError> {
    if text.trim().chars().count() < min_chars {
        return Err(AppError::UnprocessableEntity(
            NO_READABLE_TEXT_MESSAGE.to_string(),
        ));
    }
    Ok(())
}

/// Manual entry only has to be non-blank.
pub fn require_manual_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(EMPTY_MANUAL_ENTRY_MESSAGE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            ImportKind::detect(Some("application/pdf"), None),
            Some(ImportKind::Pdf)
        );
        assert_eq!(
            ImportKind::detect(Some("text/plain; charset=utf-8"), Some("blob")),
            Some(ImportKind::PlainText)
        );
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            ImportKind::detect(Some("application/octet-stream"), Some("CV.PDF")),
            Some(ImportKind::Pdf)
        );
        assert_eq!(
            ImportKind::detect(None, Some("resume.txt")),
            Some(ImportKind::PlainText)
        );
    }

    #[test]
    fn test_pdf_extension_beats_text_content_type() {
        assert_eq!(
            ImportKind::detect(Some("text/plain"), Some("resume.pdf")),
            Some(ImportKind::Pdf)
        );
    }

    #[test]
    fn test_unsupported_kinds() {
        assert_eq!(ImportKind::detect(None, None), None);
        assert_eq!(
            ImportKind::detect(
                Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
                Some("resume.docx")
            ),
            None
        );
        assert_eq!(ImportKind::detect(None, Some("txt")), None);
    }

    #[test]
    fn test_size_limit() {
        assert!(check_size(10 * MIB, 10 * MIB).is_ok());
        match check_size(10 * MIB + 1, 10 * MIB) {
            Err(AppError::PayloadTooLarge(msg)) => {
                assert_eq!(msg, "File size must be less than 10MB")
            }
            other => panic!("expected PayloadTooLarge, got {other:?}"),
        }
        match check_size(17, 16) {
            Err(AppError::PayloadTooLarge(msg)) => assert!(msg.ends_with("16 bytes")),
            other => panic!("expected PayloadTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_text_is_lossy() {
        let decoded = decode_plain_text(b"Jane \xff Doe");
        assert_eq!(decoded.text, "Jane \u{fffd} Doe");
        assert_eq!(decoded.decoder, "utf8_lossy");
    }

    #[test]
    fn test_readable_text_gate() {
        assert!(require_readable("  Jane Doe, engineer  ", 10).is_ok());
        assert!(matches!(
            require_readable("   short   ", 10),
            Err(AppError::UnprocessableEntity(msg)) if msg == NO_READABLE_TEXT_MESSAGE
        ));
    }

    #[test]
    fn test_manual_entry_gate() {
        assert!(require_manual_text("x").is_ok());
        assert!(matches!(
            require_manual_text(" \n\t "),
            Err(AppError::Validation(msg)) if msg == EMPTY_MANUAL_ENTRY_MESSAGE
        ));
    }
}
