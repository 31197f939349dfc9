use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports the service version and which PDF backends are active, since the
/// remote extraction service is optional.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-portal-api",
        "pdf_backends": state.pdf_decoder.backend_names(),
    }))
}
