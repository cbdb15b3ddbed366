//! Energy share per macro-nutrient
//!
//! Converts gram totals to kcal with the usual Atwater factors and expresses
//! each macro as a share of the energy they add up to.

use serde::Serialize;

use super::types::Macros;

/// kcal per gram of carbohydrate
pub const KCAL_PER_GRAM_CARBOHYDRATE: f64 = 4.0;
/// kcal per gram of protein
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// One macro's contribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroShare {
    pub grams: f64,
    pub kcal: f64,
    /// 0-100
    pub percent: f64,
}

/// Breakdown shown under the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroBreakdown {
    /// Calories as reported for the meal
    pub calories: f64,
    pub carbohydrates: MacroShare,
    pub protein: MacroShare,
    pub fat: MacroShare,
}

impl MacroBreakdown {
    pub fn from_macros(macros: &Macros) -> Self {
        let macros = macros.sanitized();
        let carb_kcal = macros.carbohydrates * KCAL_PER_GRAM_CARBOHYDRATE;
        let protein_kcal = macros.protein * KCAL_PER_GRAM_PROTEIN;
        let fat_kcal = macros.fat * KCAL_PER_GRAM_FAT;
        let total = carb_kcal + protein_kcal + fat_kcal;

        let share = |grams: f64, kcal: f64| MacroShare {
            grams,
            kcal,
            percent: if total > 0.0 { kcal / total * 100.0 } else { 0.0 },
        };

        Self {
            calories: macros.calories,
            carbohydrates: share(macros.carbohydrates, carb_kcal),
            protein: share(macros.protein, protein_kcal),
            fat: share(macros.fat, fat_kcal),
        }
    }

    /// Energy implied by the gram totals
    pub fn macro_kcal(&self) -> f64 {
        self.carbohydrates.kcal + self.protein.kcal + self.fat.kcal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_shares() {
        let breakdown = MacroBreakdown::from_macros(&Macros::new(120.0, 10.0, 3.0, 5.0));

        assert_eq!(breakdown.calories, 120.0);
        assert_eq!(breakdown.carbohydrates.kcal, 40.0);
        assert_eq!(breakdown.protein.kcal, 12.0);
        assert_eq!(breakdown.fat.kcal, 45.0);
        assert_eq!(breakdown.macro_kcal(), 97.0);

        let sum = breakdown.carbohydrates.percent
            + breakdown.protein.percent
            + breakdown.fat.percent;
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((breakdown.fat.percent - 46.39).abs() < 0.01);
    }

    #[test]
    fn test_breakdown_empty_meal() {
        let breakdown = MacroBreakdown::from_macros(&Macros::default());
        assert_eq!(breakdown.carbohydrates.percent, 0.0);
        assert_eq!(breakdown.protein.percent, 0.0);
        assert_eq!(breakdown.fat.percent, 0.0);
    }
}
