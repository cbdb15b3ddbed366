//! Energy split under the header

use leptos::*;
use macrolens::meal::{MacroBreakdown, MacroShare};
use macrolens::results::format_amount;

use crate::state::global::GlobalState;

/// Bar of the current meal's energy per macro
#[component]
pub fn MacroBreakdownBar() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let breakdown = create_memo(move |_| {
        state
            .store
            .with(|store| MacroBreakdown::from_macros(&store.record().macros))
    });

    view! {
        <div class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 py-3 grid grid-cols-4 gap-4 text-sm">
                <div>
                    <div class="text-gray-400">"Calories"</div>
                    <div class="text-lg font-semibold">
                        {move || format!("{} kcal", format_amount(breakdown.get().calories))}
                    </div>
                </div>
                <ShareCell label="Carbs" color="bg-yellow-500" share=Signal::derive(move || breakdown.get().carbohydrates) />
                <ShareCell label="Protein" color="bg-green-500" share=Signal::derive(move || breakdown.get().protein) />
                <ShareCell label="Fat" color="bg-red-500" share=Signal::derive(move || breakdown.get().fat) />
            </div>
        </div>
    }
}

#[component]
fn ShareCell(
    label: &'static str,
    color: &'static str,
    #[prop(into)]
    share: Signal<MacroShare>,
) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between text-gray-400">
                <span>{label}</span>
                <span>{move || format!("{:.0}%", share.get().percent)}</span>
            </div>
            <div class="h-2 bg-gray-700 rounded mt-1">
                <div
                    class=format!("h-2 rounded {}", color)
                    style=move || format!("width: {:.1}%", share.get().percent)
                />
            </div>
            <div class="text-xs text-gray-500 mt-1">
                {move || format!("{} g", format_amount(share.get().grams))}
            </div>
        </div>
    }
}
