//! Welcome Splash

use leptos::*;

/// Full-screen welcome shown for the first seconds after load
#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center text-center">
            <div class="text-6xl mb-4">"🥗"</div>
            <h1 class="text-4xl font-bold mb-2">"MacroLens"</h1>
            <p class="text-gray-400">"Snap your meal. Know your macros."</p>
        </div>
    }
}
