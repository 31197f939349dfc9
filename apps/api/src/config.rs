use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so an empty environment is a valid one.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: usize,
    /// Minimum trimmed length of any decoded text.
    pub min_text_chars: usize,
    /// Minimum trimmed length for a PDF backend's output to be accepted.
    pub min_pdf_text_chars: usize,
    /// External PDF extraction endpoint; skipped when unset.
    pub pdf_service_url: Option<String>,
    pub pdf_service_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            min_text_chars: 10,
            min_pdf_text_chars: 50,
            pdf_service_url: None,
            pdf_service_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            min_text_chars: env_or("MIN_TEXT_CHARS", defaults.min_text_chars)?,
            min_pdf_text_chars: env_or("MIN_PDF_TEXT_CHARS", defaults.min_pdf_text_chars)?,
            pdf_service_url: std::env::var("PDF_SERVICE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            pdf_service_timeout_secs: env_or(
                "PDF_SERVICE_TIMEOUT_SECS",
                defaults.pdf_service_timeout_secs,
            )?,
        })
    }
}

/// Parses `key` when set, falling back to `default` when it is absent.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}
