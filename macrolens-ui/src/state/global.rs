//! Global Application State
//!
//! Wraps the core [`AppStore`] in a Leptos signal. Components read through
//! `store.with(..)` and mutate only through the store's own operations.

use leptos::*;
use macrolens::store::{AppStore, SubmissionOutcome};
use web_sys::FormData;

use crate::api;

/// Welcome splash duration
pub const SPLASH_DURATION_MS: u64 = 3000;

/// How long a notification stays open
pub const NOTIFICATION_DURATION_MS: u32 = 6000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Root state container
    pub store: RwSignal<AppStore>,
    /// Number of uploads waiting for an answer
    pub pending: RwSignal<usize>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        store: create_rw_signal(AppStore::new()),
        pending: create_rw_signal(0),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Send one photo and apply the answer to the store.
    pub async fn submit_image(self, form: FormData) {
        let Some(token) = self.store.try_update(|store| store.begin_submission()) else {
            return;
        };
        self.pending.update(|n| *n += 1);
        web_sys::console::log_1(&format!("Uploading image (submission {})", token).into());

        let result = api::analyze_image(form).await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Analysis request failed: {}", e).into());
        }

        self.pending.update(|n| *n = n.saturating_sub(1));
        let Some(outcome) = self
            .store
            .try_update(|store| store.finish_submission(token, result))
        else {
            return;
        };

        match outcome {
            SubmissionOutcome::Accepted => {
                web_sys::console::log_1(&format!("Nutrition data received ({})", token).into());
            }
            SubmissionOutcome::Rejected(failure) => {
                web_sys::console::error_1(&format!("Analysis rejected: {}", failure).into());
                self.schedule_auto_hide();
            }
            SubmissionOutcome::Stale => {
                web_sys::console::log_1(&format!("Ignoring stale response ({})", token).into());
            }
        }
    }

    /// Close the current notification after the display period, unless a
    /// newer one replaced it by then.
    pub fn schedule_auto_hide(self) {
        let serial = self.store.with_untracked(|store| store.notification_serial());
        let store = self.store;

        gloo_timers::callback::Timeout::new(NOTIFICATION_DURATION_MS, move || {
            store.try_update(|store| store.expire_notification(serial));
        })
        .forget();
    }

    pub fn is_uploading(&self) -> bool {
        self.pending.get() > 0
    }
}
