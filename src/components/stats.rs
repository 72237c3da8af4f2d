//! Stats Component
//!
//! Progress footer derived from the current list.

use leptos::prelude::*;

use packing_domain::StatsSummary;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Stats() -> impl IntoView {
    let store = use_app_store();
    let summary = move || store.controller().read().list().stats();

    move || match summary() {
        StatsSummary::Empty => view! {
            <p class="stats">
                <em>{StatsSummary::Empty.message()}</em>
            </p>
        }
        .into_any(),
        other => view! {
            <footer class="stats">
                <em>{other.message()}</em>
            </footer>
        }
        .into_any(),
    }
}
