//! Meal record types

use serde::{Deserialize, Serialize};

use super::lenient;

/// Macro-nutrient totals for a meal (kcal and grams).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    #[serde(default, deserialize_with = "lenient::number")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub carbohydrates: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub fat: f64,
}

impl Macros {
    pub fn new(calories: f64, carbohydrates: f64, protein: f64, fat: f64) -> Self {
        Self {
            calories,
            carbohydrates,
            protein,
            fat,
        }
    }

    /// Copy with every non-finite value replaced by `0`.
    pub fn sanitized(self) -> Self {
        Self {
            calories: lenient::finite_or_zero(self.calories),
            carbohydrates: lenient::finite_or_zero(self.carbohydrates),
            protein: lenient::finite_or_zero(self.protein),
            fat: lenient::finite_or_zero(self.fat),
        }
    }
}

/// One detected ingredient of a meal.
///
/// Empty `name` or `unit` means the server did not supply one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub carbohydrates: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub fat: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            ..Self::default()
        }
    }

    pub fn macros(mut self, calories: f64, carbohydrates: f64, protein: f64, fat: f64) -> Self {
        self.calories = calories;
        self.carbohydrates = carbohydrates;
        self.protein = protein;
        self.fat = fat;
        self
    }
}

/// The canonical in-memory meal: created empty, replaced wholesale on every
/// accepted analysis and on every saved edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    #[serde(default)]
    pub dish: String,
    #[serde(default, rename = "imageURL")]
    pub image_url: String,
    #[serde(default)]
    pub macros: Macros,
    #[serde(default)]
    pub original_macros: Macros,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Bumped on every update; only used to tell views that new data arrived.
    #[serde(default)]
    pub edit_version: u64,
}

impl MealRecord {
    /// True once any analysis or edit has landed.
    pub fn has_data(&self) -> bool {
        self.edit_version > 0
    }
}
