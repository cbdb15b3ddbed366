//! Analysis client errors

use std::path::PathBuf;
use thiserror::Error;

use super::failure::AnalysisFailure;

/// Errors raised while talking to the analysis endpoint.
///
/// All of them are transport failures from the user's point of view.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Analysis request timed out")]
    Timeout,

    #[error("Analysis server unavailable")]
    Unavailable,

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode analysis response: {0}")]
    Decode(String),

    #[error("Failed to read image {path:?}: {error}")]
    Io { path: PathBuf, error: String },
}

impl AnalysisError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Unavailable
        } else {
            Self::Request(err)
        }
    }

    /// What the banner should say
    pub fn failure(&self) -> AnalysisFailure {
        AnalysisFailure::Transport
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Decode(err.to_string())
    }
}

/// Result type alias for analysis client operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(AnalysisError::Timeout.to_string(), "Analysis request timed out");
        assert_eq!(
            AnalysisError::Decode("expected value".into()).to_string(),
            "Failed to decode analysis response: expected value"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: AnalysisError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, AnalysisError::Decode(_)));
        assert_eq!(err.failure(), AnalysisFailure::Transport);
    }
}
