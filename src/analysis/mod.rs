//! Image analysis
//!
//! Wire types for the `/analyze-image` endpoint and, on native targets, the
//! HTTP client that calls it.

pub mod dto;
pub mod failure;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod error;
#[cfg(feature = "native")]
pub mod upload;

pub use dto::{AnalysisResponse, NutritionPayload};
pub use failure::{
    AnalysisFailure, MISSING_PAYLOAD_MESSAGE, SERVER_FAILURE_FALLBACK, TRANSPORT_FAILURE_MESSAGE,
};

#[cfg(feature = "native")]
pub use client::{AnalysisClient, HttpAnalysisClient};
#[cfg(feature = "native")]
pub use error::{AnalysisError, AnalysisResult};
#[cfg(feature = "native")]
pub use upload::ImageUpload;
