//! Mock Routes
//!
//! - POST /analyze-image - answer an upload with the configured response
//! - GET /health - liveness

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::error::{MockError, MockResult};
use super::state::MockState;
use crate::analysis::AnalysisResponse;

/// Message when the upload has no usable image part
pub const NO_IMAGE_MESSAGE: &str = "No image uploaded.";

/// POST /analyze-image
///
/// Multipart body; the image is expected under `state.image_field`. Other
/// fields are logged and ignored.
pub async fn analyze_image(
    State(state): State<Arc<MockState>>,
    mut multipart: Multipart,
) -> MockResult<Json<AnalysisResponse>> {
    let mut image_bytes = 0usize;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| MockError::Multipart(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(|s| s.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| MockError::Multipart(e.to_string()))?;

        if name == state.image_field {
            tracing::info!(file = ?file_name, bytes = data.len(), "Image received");
            image_bytes += data.len();
        } else {
            tracing::debug!(field = %name, bytes = data.len(), "Ignoring form field");
        }
    }

    if image_bytes == 0 {
        return Ok(Json(AnalysisResponse::failure(NO_IMAGE_MESSAGE)));
    }

    Ok(Json(state.response.as_ref().clone()))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health
pub async fn health(State(state): State<Arc<MockState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
