//! User-facing analysis failures
//!
//! Every failed submission ends up as exactly one of these, shown as an
//! error banner.

use std::fmt;

/// Banner text for transport failures
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to connect to the server.";
/// Banner text for a successful response without usable nutrition data
pub const MISSING_PAYLOAD_MESSAGE: &str = "No food detected or data is missing.";
/// Banner text when the server reports failure without saying why
pub const SERVER_FAILURE_FALLBACK: &str = "The server could not analyze the image.";

/// Why a submission did not produce a meal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// Request never produced a readable response
    Transport,
    /// Server answered `success: false`, with its message
    Server(String),
    /// Server answered `success: true` without a usable payload
    MissingPayload,
}

impl AnalysisFailure {
    /// Text shown in the notification banner
    pub fn message(&self) -> &str {
        match self {
            Self::Transport => TRANSPORT_FAILURE_MESSAGE,
            Self::Server(message) if message.trim().is_empty() => SERVER_FAILURE_FALLBACK,
            Self::Server(message) => message,
            Self::MissingPayload => MISSING_PAYLOAD_MESSAGE,
        }
    }
}

impl fmt::Display for AnalysisFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(AnalysisFailure::Transport.message(), "Failed to connect to the server.");
        assert_eq!(
            AnalysisFailure::MissingPayload.message(),
            "No food detected or data is missing."
        );
        assert_eq!(
            AnalysisFailure::Server("Image too large".into()).message(),
            "Image too large"
        );
        assert_eq!(
            AnalysisFailure::Server(String::new()).message(),
            SERVER_FAILURE_FALLBACK
        );
    }
}
