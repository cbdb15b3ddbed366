//! State Management
//!
//! The shared store, provided to every component through context.

pub mod global;

pub use global::{provide_global_state, GlobalState};
