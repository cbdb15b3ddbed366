//! UI Components
//!
//! Reusable Leptos components for the page.

pub mod date_display;
pub mod footer;
pub mod loading;
pub mod macro_breakdown;
pub mod nav;
pub mod splash;
pub mod toast;

pub use date_display::DateDisplay;
pub use footer::Footer;
pub use loading::InlineLoading;
pub use macro_breakdown::MacroBreakdownBar;
pub use nav::Nav;
pub use splash::Splash;
pub use toast::Toast;
