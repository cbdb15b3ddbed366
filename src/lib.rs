//! # MacroLens
//!
//! Snap a meal, get its macro-nutrient breakdown, adjust it by hand.
//!
//! ## Features
//!
//! - **Image analysis**: one multipart upload per photo, no retries
//! - **Editable results**: a draft of the analyzed meal with permissive
//!   numeric input, saved back into the canonical record
//! - **Stale-response guard**: overlapping submissions never let an older
//!   answer overwrite a newer one
//! - **Mock backend**: a local analysis server for development
//!
//! ## Modules
//!
//! - [`meal`]: the canonical meal record
//! - [`analysis`]: analysis endpoint wire types (and the HTTP client)
//! - [`results`]: the editable result view
//! - [`store`]: the root state container
//! - [`session`]: async session tying the store to a client (native)
//! - [`mock`]: mock analysis server with Axum (native)
//!
//! Everything outside the `native` feature is plain data and compiles for
//! `wasm32-unknown-unknown`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use macrolens::analysis::{HttpAnalysisClient, ImageUpload};
//! use macrolens::config::Config;
//! use macrolens::results::{MacroField, ResultView};
//! use macrolens::session::Session;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = HttpAnalysisClient::new(config.server.clone())?;
//!     let session = Session::new(client, &config.ui);
//!
//!     // Analyze a photo
//!     let upload = ImageUpload::from_path(Path::new("lunch.jpg")).await?;
//!     session.submit_image(upload).await;
//!
//!     // Fix the calorie count and save
//!     let state = session.snapshot().await;
//!     let mut view = ResultView::load_from_source(state.record());
//!     view.edit_field(MacroField::TotalCalories, "450");
//!     session.complete_edit(view.save()).await;
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod meal;
pub mod results;
pub mod store;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod mock;
#[cfg(feature = "native")]
pub mod session;
#[cfg(feature = "native")]
pub mod telemetry;

// Re-export top-level types for convenience
pub use meal::{Ingredient, MacroBreakdown, MacroShare, Macros, MealRecord};

pub use analysis::{AnalysisFailure, AnalysisResponse, NutritionPayload};

pub use results::{Draft, EditedMeal, IngredientRow, MacroField, ResultView, ViewMode};

pub use store::{
    AppStore, Notification, Severity, StalePolicy, SubmissionOutcome, SubmissionToken,
};

#[cfg(feature = "native")]
pub use analysis::{AnalysisClient, AnalysisError, HttpAnalysisClient, ImageUpload};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};

#[cfg(feature = "native")]
pub use session::Session;
