//! Navigation Component
//!
//! Header bar with the brand and the photo upload control.

use leptos::*;
use leptos_router::*;
use web_sys::{FormData, HtmlInputElement};

use crate::components::InlineLoading;
use crate::state::global::GlobalState;

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🥗"</span>
                        <span class="text-xl font-bold text-white">"MacroLens"</span>
                    </A>

                    <UploadButton />
                </div>
            </div>
        </nav>
    }
}

/// Photo picker; every selection is sent straight to the server
#[component]
fn UploadButton() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let form = match FormData::new() {
            Ok(form) => form,
            Err(e) => {
                web_sys::console::error_1(&e);
                return;
            }
        };
        if let Err(e) = form.append_with_blob_and_filename(IMAGE_FIELD, &file, &file.name()) {
            web_sys::console::error_1(&e);
            return;
        }

        // Allow picking the same file again
        input.set_value("");

        spawn_local(state.submit_image(form));
    };

    view! {
        <label class="flex items-center gap-2 px-4 py-2 bg-primary-600 hover:bg-primary-700
                      rounded-lg font-medium cursor-pointer transition-colors">
            <input type="file" accept="image/*" class="hidden" on:change=on_change />
            {move || if state.is_uploading() {
                view! { <InlineLoading /> }.into_view()
            } else {
                view! { <span>"📷"</span> }.into_view()
            }}
            <span>"Analyze a meal"</span>
        </label>
    }
}
