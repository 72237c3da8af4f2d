//! Sort Selector Component
//!
//! Drop-down for the list's display order.

use leptos::prelude::*;

use packing_domain::SortMode;

/// Select with one option per sort mode
#[component]
pub fn SortSelector(
    sort_mode: ReadSignal<SortMode>,
    set_sort_mode: WriteSignal<SortMode>,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || sort_mode.get().as_str()
            on:change=move |ev| set_sort_mode.set(SortMode::from_str(&event_target_value(&ev)))
        >
            {SortMode::ALL.iter().map(|mode| {
                view! { <option value=mode.as_str()>{mode.label()}</option> }
            }).collect_view()}
        </select>
    }
}
