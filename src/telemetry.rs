//! Logging setup
//!
//! Installs a `tracing` subscriber from [`LoggingConfig`]. `RUST_LOG` takes
//! precedence over the configured level. Output goes to stderr (or the
//! configured file) so stdout stays free for the terminal front ends.

use std::fs::OpenOptions;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Failed to open log file {path}: {error}")]
    LogFile { path: String, error: std::io::Error },

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Filter directives for a level: our crate at `level`, HTTP plumbing quieter.
pub fn default_directives(level: &str) -> String {
    format!("macrolens={},tower_http=info,reqwest=warn", level)
}

/// Install the global subscriber.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let writer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| TelemetryError::LogFile {
                    path: path.clone(),
                    error,
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    let result = if config.format == "json" {
        builder.json().with_target(false).try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives("debug"),
            "macrolens=debug,tower_http=info,reqwest=warn"
        );
    }

    #[test]
    fn test_unwritable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("no/such/dir/log.txt").to_string_lossy().to_string()),
            ..LoggingConfig::default()
        };
        assert!(matches!(init(&config), Err(TelemetryError::LogFile { .. })));
    }
}
