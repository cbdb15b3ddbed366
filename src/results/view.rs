//! Editable Result View
//!
//! Holds a local draft of the current meal. The draft is edited field by
//! field and only reaches the canonical record when saved.
//!
//! ```text
//!   load_from_source ──► Editing ──save──► Viewing
//!                          ▲                  │
//!                          └──start_editing───┘
//! ```

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::format::{format_amount, format_timestamp, format_weight};
use crate::meal::{lenient, Ingredient, MealRecord};

/// Placeholder for missing text
pub const NOT_AVAILABLE: &str = "N/A";

/// Which representation the view is producing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Editing,
    Viewing,
}

/// The four editable macro totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroField {
    TotalCalories,
    TotalCarbs,
    TotalProteins,
    TotalFat,
}

impl MacroField {
    /// Form order
    pub const ALL: [MacroField; 4] = [
        MacroField::TotalCalories,
        MacroField::TotalCarbs,
        MacroField::TotalProteins,
        MacroField::TotalFat,
    ];

    /// Form field name
    pub fn name(&self) -> &'static str {
        match self {
            Self::TotalCalories => "totalCalories",
            Self::TotalCarbs => "totalCarbs",
            Self::TotalProteins => "totalProteins",
            Self::TotalFat => "totalFat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalCalories => "Calories",
            Self::TotalCarbs => "Carbs",
            Self::TotalProteins => "Proteins",
            Self::TotalFat => "Fats",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::TotalCalories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for MacroField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for MacroField {
    type Err = UnknownField;

    /// Accepts the form names plus the short names used on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "totalcalories" | "calories" | "kcal" => Ok(Self::TotalCalories),
            "totalcarbs" | "carbs" | "carbohydrates" => Ok(Self::TotalCarbs),
            "totalproteins" | "proteins" | "protein" => Ok(Self::TotalProteins),
            "totalfat" | "fat" | "fats" => Ok(Self::TotalFat),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// Ingredient in display shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRow {
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub fat: f64,
    pub protein: f64,
    pub weight: String,
}

impl From<&Ingredient> for IngredientRow {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            name: text_or_placeholder(&ingredient.name),
            calories: lenient::finite_or_zero(ingredient.calories),
            carbs: lenient::finite_or_zero(ingredient.carbohydrates),
            fat: lenient::finite_or_zero(ingredient.fat),
            protein: lenient::finite_or_zero(ingredient.protein),
            weight: format_weight(ingredient.quantity, &ingredient.unit),
        }
    }
}

/// Local, possibly unsaved copy of the meal details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub meal_name: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// Formatted capture time, set at load and at save
    pub date: String,
    pub total_calories: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub total_proteins: f64,
    pub ingredients: Vec<IngredientRow>,
}

impl Draft {
    pub fn get(&self, field: MacroField) -> f64 {
        match field {
            MacroField::TotalCalories => self.total_calories,
            MacroField::TotalCarbs => self.total_carbs,
            MacroField::TotalProteins => self.total_proteins,
            MacroField::TotalFat => self.total_fat,
        }
    }

    fn set(&mut self, field: MacroField, value: f64) {
        match field {
            MacroField::TotalCalories => self.total_calories = value,
            MacroField::TotalCarbs => self.total_carbs = value,
            MacroField::TotalProteins => self.total_proteins = value,
            MacroField::TotalFat => self.total_fat = value,
        }
    }
}

/// What the view hands back to the container on save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditedMeal {
    pub meal_name: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient::number")]
    pub total_calories: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub total_carbs: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub total_fat: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub total_proteins: f64,
    pub ingredients: Vec<Ingredient>,
    pub last_updated: String,
}

/// Result view state machine
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    mode: ViewMode,
    draft: Draft,
    /// Canonical ingredients, returned untouched on save
    ingredients: Vec<Ingredient>,
}

impl ResultView {
    /// Build a fresh view from the canonical record, starting in editing mode.
    pub fn load_from_source(record: &MealRecord) -> Self {
        Self::load_from_source_at(record, Local::now().naive_local())
    }

    pub fn load_from_source_at(record: &MealRecord, now: NaiveDateTime) -> Self {
        let macros = record.macros.sanitized();
        let draft = Draft {
            meal_name: text_or_placeholder(&record.dish),
            image_url: record.image_url.clone(),
            date: format_timestamp(&now),
            total_calories: macros.calories,
            total_carbs: macros.carbohydrates,
            total_fat: macros.fat,
            total_proteins: macros.protein,
            ingredients: record.ingredients.iter().map(IngredientRow::from).collect(),
        };

        Self {
            mode: ViewMode::Editing,
            draft,
            ingredients: record.ingredients.clone(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == ViewMode::Editing
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Store a raw input value. Unreadable input becomes `0`.
    pub fn edit_field(&mut self, field: MacroField, raw: &str) -> f64 {
        let value = lenient::parse_number(raw);
        self.draft.set(field, value);
        value
    }

    /// Package the draft for the container and switch to read-only mode.
    pub fn save(&mut self) -> EditedMeal {
        self.save_at(Local::now().naive_local())
    }

    pub fn save_at(&mut self, now: NaiveDateTime) -> EditedMeal {
        let last_updated = format_timestamp(&now);
        self.mode = ViewMode::Viewing;

        EditedMeal {
            meal_name: self.draft.meal_name.clone(),
            image_url: self.draft.image_url.clone(),
            total_calories: self.draft.total_calories,
            total_carbs: self.draft.total_carbs,
            total_fat: self.draft.total_fat,
            total_proteins: self.draft.total_proteins,
            ingredients: self.ingredients.clone(),
            last_updated,
        }
    }

    /// Go back to the form after a save.
    pub fn start_editing(&mut self) {
        self.mode = ViewMode::Editing;
    }

    /// Numeric fields in form order; `None` unless editing.
    pub fn fields(&self) -> Option<Vec<(MacroField, f64)>> {
        if !self.is_editing() {
            return None;
        }
        Some(
            MacroField::ALL
                .iter()
                .map(|field| (*field, self.draft.get(*field)))
                .collect(),
        )
    }

    /// Read-only lines (`Calories: 150 kcal`, ...); `None` unless viewing.
    pub fn summary_lines(&self) -> Option<Vec<String>> {
        if self.is_editing() {
            return None;
        }
        Some(
            MacroField::ALL
                .iter()
                .map(|field| {
                    format!(
                        "{}: {} {}",
                        field.label(),
                        format_amount(self.draft.get(*field)),
                        field.unit()
                    )
                })
                .collect(),
        )
    }
}

fn text_or_placeholder(text: &str) -> String {
    if text.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        text.to_string()
    }
}
