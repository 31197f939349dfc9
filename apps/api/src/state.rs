use std::sync::Arc;

use crate::config::Config;
use crate::import::pdf::PdfDecoder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// PDF backend chain, built once at startup from `config`.
    pub pdf_decoder: Arc<PdfDecoder>,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let pdf_decoder = Arc::new(PdfDecoder::from_config(&config)?);
        Ok(AppState {
            config,
            pdf_decoder,
        })
    }
}
