//! Item List Component
//!
//! Renders the list in the selected order, with sort and clear actions.

use leptos::prelude::*;

use packing_domain::{ClearOutcome, SortMode};

use crate::browser::BrowserCollator;
use crate::components::{PackingItem, SortSelector};
use crate::store::{store_clear_all, use_app_store, AppStateStoreFields};

/// Packing list with its actions bar
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    // Sort mode is view state only; it never reorders the stored list
    let (sort_mode, set_sort_mode) = signal(SortMode::default());

    let sorted_items = move || {
        let mode = sort_mode.get();
        store
            .controller()
            .read()
            .list()
            .sorted(mode, &BrowserCollator)
            .into_owned()
    };

    let on_clear = move |_| {
        if store_clear_all(&store) == ClearOutcome::Declined {
            log::debug!("[LIST] Clear declined");
        }
    };

    view! {
        <div class="list">
            <ul>
                <For
                    each=sorted_items
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <PackingItem item=item /> }
                />
            </ul>
            <div class="actions">
                <SortSelector sort_mode=sort_mode set_sort_mode=set_sort_mode />
                <button on:click=on_clear>"Clear list"</button>
            </div>
        </div>
    }
}
