//! Footer Component
//!
//! Upload status and the analysis server setting.

use leptos::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::global::GlobalState;

#[component]
pub fn Footer() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        let url = api_url.get_untracked();
        api::set_api_base(url.trim());
        web_sys::console::log_1(&format!("Analysis server set to {:?}", url.trim()).into());
    };

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Server setting
                <div class="flex items-center space-x-2">
                    <span class="text-gray-400">"Server"</span>
                    <input
                        type="text"
                        placeholder="same origin"
                        class="px-2 py-1 bg-gray-700 rounded"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    />
                    <button class="px-2 py-1 bg-gray-600 hover:bg-gray-500 rounded" on:click=save_url>
                        "Save"
                    </button>
                </div>

                // Loading indicator
                {move || {
                    if state.is_uploading() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <InlineLoading />
                                <span>"Analyzing..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
