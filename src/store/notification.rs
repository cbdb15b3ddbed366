//! Notification banner state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Banner severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Success,
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dismissible banner.
///
/// Closing keeps the last message and severity until the next one replaces
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    /// An open banner
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            open: true,
            message: message.into(),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_closed() {
        let notification = Notification::default();
        assert!(!notification.open);
        assert_eq!(notification.message, "");
        assert_eq!(notification.severity, Severity::Error);
    }

    #[test]
    fn test_severity_serde() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        let severity: Severity = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(severity, Severity::Info);
        assert_eq!(Severity::Success.to_string(), "success");
    }
}
