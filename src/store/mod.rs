//! Application state
//!
//! - [`app_state`]: the root state container
//! - [`notification`]: banner state
//! - [`splash`]: welcome splash timer (native)

pub mod app_state;
pub mod notification;

#[cfg(feature = "native")]
pub mod splash;

pub use app_state::{AppStore, StalePolicy, SubmissionOutcome, SubmissionToken};
pub use notification::{Notification, Severity};

#[cfg(feature = "native")]
pub use splash::{SplashTimer, DEFAULT_SPLASH_DURATION};

/// Store handle shared between the session, timers and front ends
#[cfg(feature = "native")]
pub type SharedStore = std::sync::Arc<tokio::sync::RwLock<AppStore>>;
