//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use packing_domain::{ClockIds, FormDraft, Item, Quantity};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session-wide id source for new items
    ids: StoredValue<ClockIds>,
    /// Largest quantity the form offers
    pub max_quantity: Quantity,
}

impl AppContext {
    pub fn new(max_quantity: Quantity) -> Self {
        Self {
            ids: StoredValue::new(ClockIds::new()),
            max_quantity,
        }
    }

    /// Turn the draft into a new item and reset the draft
    pub fn submit_draft(&self, draft: RwSignal<FormDraft>) -> Option<Item> {
        let mut current = draft.get_untracked();
        let item = self.ids.try_update_value(|ids| current.submit(ids))?;
        draft.set(current);
        Some(item)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
