//! Result view
//!
//! Draft editing of the analyzed meal and its display formatting.

pub mod format;
pub mod view;

pub use format::{format_amount, format_long_date, format_timestamp, format_weight};
pub use view::{
    Draft, EditedMeal, IngredientRow, MacroField, ResultView, UnknownField, ViewMode,
    NOT_AVAILABLE,
};
