//! Home Page
//!
//! Empty-state prompt until the first analysis lands, then the editable
//! nutrition results.

use leptos::*;
use leptos_router::*;
use macrolens::results::{format_amount, MacroField, ResultView};

use crate::state::global::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let has_data = create_memo(move |_| state.store.with(|store| store.record().has_data()));

    view! {
        {move || {
            if has_data.get() {
                view! { <NutritionResults /> }.into_view()
            } else {
                view! {
                    <div class="flex flex-col items-center justify-center min-h-[40vh] text-center">
                        <div class="text-5xl mb-4">"📷"</div>
                        <h2 class="text-2xl font-semibold mb-2">"No meal yet"</h2>
                        <p class="text-gray-400">"Pick a photo with \"Analyze a meal\" to get started."</p>
                    </div>
                }.into_view()
            }
        }}
    }
}

/// Editable results.
///
/// A fresh view is built from the record each time a new analysis opens the
/// editor. Saving hands the draft back to the store and keeps the view in
/// read-only mode.
#[component]
fn NutritionResults() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let result_view = create_rw_signal(None::<ResultView>);

    create_effect(move |previous: Option<u64>| {
        let (version, open) = state
            .store
            .with(|store| (store.record().edit_version, store.show_edit_modal()));

        if open && previous != Some(version) {
            let view = state
                .store
                .with_untracked(|store| ResultView::load_from_source(store.record()));
            result_view.set(Some(view));
        } else if result_view.with_untracked(Option::is_none) {
            // Mounted after a save: show the saved record read-only
            let view = state.store.with_untracked(|store| {
                let mut view = ResultView::load_from_source(store.record());
                view.save();
                view
            });
            result_view.set(Some(view));
        }
        version
    });

    let save = move |_| {
        let edited = result_view
            .try_update(|view| view.as_mut().map(|view| view.save()))
            .flatten();
        if let Some(edited) = edited {
            state.store.update(|store| store.complete_edit(edited));
        }
    };

    let start_editing = move |_| {
        result_view.update(|view| {
            if let Some(view) = view {
                view.start_editing();
            }
        });
    };

    view! {
        {move || result_view.with(|view| view.as_ref().map(|view| {
            let draft = view.draft().clone();
            let editing = view.is_editing();
            let fields = view.fields().unwrap_or_default();
            let lines = view.summary_lines().unwrap_or_default();

            view! {
                <section class="bg-gray-800 rounded-xl p-6 space-y-6">
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <h2 class="text-2xl font-bold">{draft.meal_name.clone()}</h2>
                            <p class="text-sm text-gray-400">{draft.date.clone()}</p>
                        </div>
                        {(!draft.image_url.is_empty()).then(|| view! {
                            <img src=draft.image_url.clone() alt=draft.meal_name.clone()
                                 class="w-32 h-32 object-cover rounded-lg" />
                        })}
                    </div>

                    {if editing {
                        view! {
                            <div class="grid grid-cols-2 gap-4">
                                {fields.into_iter().map(|(field, value)| view! {
                                    <MacroInput field=field value=value result_view=result_view />
                                }).collect_view()}
                            </div>
                            <button
                                on:click=save
                                class="px-6 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                            >
                                "Save"
                            </button>
                        }.into_view()
                    } else {
                        view! {
                            <ul class="space-y-1">
                                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                            </ul>
                            <button
                                on:click=start_editing
                                class="px-6 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                            >
                                "Edit"
                            </button>
                        }.into_view()
                    }}

                    {(!draft.ingredients.is_empty()).then(|| view! {
                        <table class="w-full text-sm">
                            <thead class="text-gray-400">
                                <tr>
                                    <th class="text-left">"Ingredient"</th>
                                    <th class="text-right">"kcal"</th>
                                    <th class="text-right">"Carbs"</th>
                                    <th class="text-right">"Protein"</th>
                                    <th class="text-right">"Fat"</th>
                                    <th class="text-right">"Weight"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {draft.ingredients.iter().map(|row| view! {
                                    <tr class="border-t border-gray-700">
                                        <td>{row.name.clone()}</td>
                                        <td class="text-right">{format_amount(row.calories)}</td>
                                        <td class="text-right">{format_amount(row.carbs)}</td>
                                        <td class="text-right">{format_amount(row.protein)}</td>
                                        <td class="text-right">{format_amount(row.fat)}</td>
                                        <td class="text-right">{row.weight.clone()}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    })}
                </section>
            }
        }))}
    }
}

/// Numeric input for one total; anything unreadable is stored as 0
#[component]
fn MacroInput(
    field: MacroField,
    value: f64,
    result_view: RwSignal<Option<ResultView>>,
) -> impl IntoView {
    let on_change = move |ev| {
        let raw = event_target_value(&ev);
        result_view.update(|view| {
            if let Some(view) = view {
                view.edit_field(field, &raw);
            }
        });
    };

    view! {
        <label class="block">
            <span class="text-sm text-gray-400">{format!("{} ({})", field.label(), field.unit())}</span>
            <input
                type="number"
                name=field.name()
                value=format_amount(value)
                on:change=on_change
                class="mt-1 w-full px-3 py-2 bg-gray-700 rounded-lg"
            />
        </label>
    }
}

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to MacroLens"
            </A>
        </div>
    }
}
