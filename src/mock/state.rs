//! Mock Server State

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use super::error::{MockError, MockResult};
use crate::analysis::{AnalysisResponse, NutritionPayload};
use crate::config::MockConfig;
use crate::meal::{Ingredient, Macros};

/// Shared state for the mock handlers
#[derive(Debug, Clone)]
pub struct MockState {
    /// Response served for every upload that carries an image
    pub response: Arc<AnalysisResponse>,
    /// Multipart field expected to carry the image
    pub image_field: String,
    pub start_time: Instant,
}

impl MockState {
    pub fn new(config: &MockConfig, image_field: impl Into<String>) -> MockResult<Self> {
        let response = match &config.fixture {
            Some(path) => load_fixture(Path::new(path))?,
            None => sample_response(),
        };

        Ok(Self::with_response(response, image_field))
    }

    pub fn with_response(response: AnalysisResponse, image_field: impl Into<String>) -> Self {
        Self {
            response: Arc::new(response),
            image_field: image_field.into(),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Read a JSON analysis response from disk.
pub fn load_fixture(path: &Path) -> MockResult<AnalysisResponse> {
    let content = std::fs::read_to_string(path).map_err(|e| MockError::Fixture {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| MockError::Fixture {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Built-in response: a small salad
pub fn sample_response() -> AnalysisResponse {
    AnalysisResponse::success(&NutritionPayload {
        dish: "Salad".to_string(),
        image_url: "/images/salad.jpg".to_string(),
        macros: Macros::new(120.0, 10.0, 3.0, 5.0),
        ingredients: vec![
            Ingredient::new("Lettuce", 100.0, "g").macros(15.0, 2.9, 1.4, 0.2),
            Ingredient::new("Tomato", 80.0, "g").macros(14.0, 3.1, 0.7, 0.2),
            Ingredient::new("Olive oil", 10.0, "ml").macros(88.0, 0.0, 0.0, 10.0),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_response_is_valid() {
        let payload = sample_response().classify().unwrap();
        assert_eq!(payload.dish, "Salad");
        assert_eq!(payload.ingredients.len(), 3);
    }

    #[test]
    fn test_load_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.json");
        std::fs::write(&path, r#"{"success": false, "error": "Image too large"}"#).unwrap();

        let config = MockConfig {
            fixture: Some(path.to_string_lossy().to_string()),
            ..MockConfig::default()
        };
        let state = MockState::new(&config, "image").unwrap();
        assert_eq!(state.response.error.as_deref(), Some("Image too large"));
    }

    #[test]
    fn test_bad_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(load_fixture(&path), Err(MockError::Fixture { .. })));
        assert!(matches!(
            load_fixture(&dir.path().join("missing.json")),
            Err(MockError::Fixture { .. })
        ));
    }
}
