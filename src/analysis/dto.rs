//! Analysis endpoint wire types
//!
//! `POST /analyze-image` answers with:
//!
//! ```text
//! { success: bool, error?: string,
//!   finalNutritionData?: { dish, imageURL, macros, ingredients } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::failure::AnalysisFailure;
use crate::meal::{lenient, Ingredient, Macros};

/// Body of an analysis response.
///
/// `finalNutritionData` is kept as raw JSON until validation so that a
/// malformed payload is reported as "no food detected" instead of failing the
/// whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_nutrition_data: Option<Value>,
}

/// Validated `finalNutritionData`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionPayload {
    #[serde(default, deserialize_with = "lenient::text")]
    pub dish: String,
    #[serde(default, rename = "imageURL", deserialize_with = "lenient::text")]
    pub image_url: String,
    #[serde(default)]
    pub macros: Macros,
    #[serde(default, deserialize_with = "lenient::list")]
    pub ingredients: Vec<Ingredient>,
}

impl AnalysisResponse {
    /// Successful response carrying `payload`
    pub fn success(payload: &NutritionPayload) -> Self {
        Self {
            success: true,
            error: None,
            final_nutrition_data: serde_json::to_value(payload).ok(),
        }
    }

    /// Failed response with a server message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            final_nutrition_data: None,
        }
    }

    /// Decode `finalNutritionData`, if present and object-shaped.
    pub fn nutrition(&self) -> Option<NutritionPayload> {
        match self.final_nutrition_data.as_ref()? {
            value @ Value::Object(_) => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }

    /// Split a response into its payload or the failure to report.
    ///
    /// `success: false` always wins over any payload the server attached.
    pub fn classify(&self) -> Result<NutritionPayload, AnalysisFailure> {
        if !self.success {
            return Err(AnalysisFailure::Server(self.error.clone().unwrap_or_default()));
        }
        self.nutrition().ok_or(AnalysisFailure::MissingPayload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn salad() -> Value {
        json!({
            "success": true,
            "finalNutritionData": {
                "dish": "Salad",
                "imageURL": "x.jpg",
                "macros": {"calories": 120, "carbohydrates": 10, "protein": 3, "fat": 5},
                "ingredients": []
            }
        })
    }

    #[test]
    fn test_decode_success() {
        let response: AnalysisResponse = serde_json::from_value(salad()).unwrap();
        let payload = response.classify().unwrap();

        assert_eq!(payload.dish, "Salad");
        assert_eq!(payload.image_url, "x.jpg");
        assert_eq!(payload.macros, Macros::new(120.0, 10.0, 3.0, 5.0));
        assert!(payload.ingredients.is_empty());
    }

    #[test]
    fn test_decode_server_failure() {
        let response: AnalysisResponse =
            serde_json::from_value(json!({"success": false, "error": "Image too large"})).unwrap();

        assert_eq!(
            response.classify(),
            Err(AnalysisFailure::Server("Image too large".to_string()))
        );
    }

    #[test]
    fn test_missing_success_flag_is_failure() {
        let response: AnalysisResponse = serde_json::from_value(json!({"error": "nope"})).unwrap();
        assert!(!response.success);
        assert!(matches!(response.classify(), Err(AnalysisFailure::Server(_))));
    }

    #[test]
    fn test_missing_payload() {
        let response: AnalysisResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(response.classify(), Err(AnalysisFailure::MissingPayload));

        let response: AnalysisResponse =
            serde_json::from_value(json!({"success": true, "finalNutritionData": null})).unwrap();
        assert_eq!(response.classify(), Err(AnalysisFailure::MissingPayload));
    }

    #[test]
    fn test_malformed_payload() {
        let response: AnalysisResponse =
            serde_json::from_value(json!({"success": true, "finalNutritionData": "salad"})).unwrap();
        assert_eq!(response.classify(), Err(AnalysisFailure::MissingPayload));
    }

    #[test]
    fn test_success_constructor_round_trips_payload() {
        let payload = NutritionPayload {
            dish: "Soup".to_string(),
            image_url: "soup.png".to_string(),
            macros: Macros::new(200.0, 20.0, 8.0, 9.0),
            ingredients: vec![Ingredient::new("Carrot", 50.0, "g")],
        };
        let response = AnalysisResponse::success(&payload);
        assert_eq!(response.classify(), Ok(payload));
    }
}
