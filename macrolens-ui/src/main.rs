//! MacroLens Web
//!
//! Meal photo analysis in the browser, built with Leptos (WASM).
//!
//! # Features
//!
//! - Photo upload to the analysis server
//! - Editable calorie and macro totals
//! - Energy split per macro-nutrient
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state transitions live in the `macrolens` core crate; the
//! components here only render that state and forward user input to it.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
