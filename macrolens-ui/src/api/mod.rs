//! Analysis server access

pub mod client;

pub use client::{analyze_image, get_api_base, set_api_base};
