//! Toast Notification Component
//!
//! Renders the store's notification banner.

use leptos::*;
use macrolens::store::Severity;

use crate::state::global::GlobalState;

/// Icon and background class for a severity
fn severity_style(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Success => ("✓", "bg-green-600"),
        Severity::Error => ("✕", "bg-red-600"),
        Severity::Warning => ("⚠", "bg-yellow-600"),
        Severity::Info => ("ℹ", "bg-blue-600"),
    }
}

/// Notification banner, shown while open
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let dismiss = move |_| {
        state.store.update(|store| store.dismiss_notification());
    };

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                let notification = state.store.with(|store| store.notification().clone());
                if !notification.open {
                    return view! {}.into_view();
                }

                let (icon, bg_class) = severity_style(notification.severity);
                view! {
                    <div
                        role="alert"
                        class=format!(
                            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                             transform transition-all duration-300 ease-out animate-slide-in",
                            bg_class
                        )
                    >
                        <span class="text-lg">{icon}</span>
                        <span class="text-sm font-medium">{notification.message}</span>
                        <button class="ml-2 text-white/70 hover:text-white" on:click=dismiss>"✕"</button>
                    </div>
                }.into_view()
            }}
        </div>
    }
}
