//! Mock Server Error Types
//!
//! Startup failures, plus request failures rendered as analysis responses so
//! clients see the same body shape as from the real backend.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::path::PathBuf;
use thiserror::Error;

use crate::analysis::AnalysisResponse;

/// Mock server errors
#[derive(Error, Debug)]
pub enum MockError {
    /// Fixture file missing or not an analysis response
    #[error("Failed to load fixture {path:?}: {error}")]
    Fixture { path: PathBuf, error: String },

    /// Upload body could not be read
    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Serve(String),
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let status = match &self {
            MockError::Multipart(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error_message = %self, "Mock request failed");

        (status, Json(AnalysisResponse::failure(self.to_string()))).into_response()
    }
}

/// Result type for mock server operations
pub type MockResult<T> = Result<T, MockError>;
