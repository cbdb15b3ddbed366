//! Meal data model
//!
//! - [`types`]: `MealRecord`, `Macros`, `Ingredient`
//! - [`breakdown`]: energy share per macro for display
//! - [`lenient`]: permissive number/text coercion used on every input path

pub mod breakdown;
pub mod lenient;
pub mod types;

pub use breakdown::{MacroBreakdown, MacroShare};
pub use types::{Ingredient, MealRecord, Macros};
