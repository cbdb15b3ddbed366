//! Today's date above the main content

use chrono::Local;
use leptos::*;
use macrolens::results::format_long_date;

#[component]
pub fn DateDisplay() -> impl IntoView {
    let today = format_long_date(&Local::now().date_naive());

    view! {
        <p class="text-sm uppercase tracking-wide text-gray-400 mb-6">{today}</p>
    }
}
