//! Packing Item Component
//!
//! One row of the list.

use leptos::prelude::*;

use packing_domain::Item;

use crate::store::{store_delete_item, store_toggle_packed, use_app_store};

/// A single list row: packed checkbox, label, delete button
#[component]
pub fn PackingItem(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let packed = item.packed;
    let label = item.label();

    view! {
        <li>
            <input
                type="checkbox"
                checked=packed
                on:change=move |_| store_toggle_packed(&store, id)
            />
            // Strike-through is purely visual
            <span style=if packed { "text-decoration: line-through;" } else { "" }>
                {label}
            </span>
            <button class="delete-btn" on:click=move |_| store_delete_item(&store, id)>
                "❌"
            </button>
        </li>
    }
}
