//! App Root Component
//!
//! Welcome splash, then the single page with its header, date line, results
//! panel and notification banner.

use leptos::*;
use leptos_router::*;
use std::time::Duration;

use crate::components::{DateDisplay, Footer, MacroBreakdownBar, Nav, Splash, Toast};
use crate::pages::{Home, NotFound};
use crate::state::global::{provide_global_state, SPLASH_DURATION_MS};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    let state = provide_global_state();

    // Hide the splash once; cleared if the app unmounts first
    let splash = set_timeout_with_handle(
        move || {
            state.store.try_update(|store| store.on_splash_timeout());
        },
        Duration::from_millis(SPLASH_DURATION_MS),
    );
    on_cleanup(move || {
        if let Ok(handle) = splash {
            handle.clear();
        }
    });

    let show_welcome = create_memo(move |_| state.store.with(|store| store.show_welcome()));

    view! {
        <Router>
            {move || {
                if show_welcome.get() {
                    view! { <Splash /> }.into_view()
                } else {
                    view! {
                        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                            // Header with upload control
                            <Nav />
                            <MacroBreakdownBar />

                            // Main content area
                            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                                <DateDisplay />
                                <Routes>
                                    <Route path="/" view=Home />
                                    <Route path="/*any" view=NotFound />
                                </Routes>
                            </main>

                            <Footer />

                            // Notification banner
                            <Toast />
                        </div>
                    }.into_view()
                }
            }}
        </Router>
    }
}
