//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the packing controller is the single
//! source of truth for the list.

use leptos::prelude::*;
use reactive_stores::Store;

use packing_domain::{ClearOutcome, DomainResult, Item, ItemId, PackingController};

use crate::browser::WindowConfirm;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Owns the item list; clear-all asks through `window.confirm`
    pub controller: PackingController<WindowConfirm>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            controller: PackingController::new(WindowConfirm),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new item
pub fn store_add_item(store: &AppStore, item: Item) -> DomainResult<()> {
    store.controller().write().add_item(item)
}

/// Remove an item by ID
pub fn store_delete_item(store: &AppStore, item_id: ItemId) {
    store.controller().write().delete_item(item_id);
}

/// Flip an item's packed flag by ID
pub fn store_toggle_packed(store: &AppStore, item_id: ItemId) {
    store.controller().write().toggle_packed(item_id);
}

/// Ask the user, then empty the list
pub fn store_clear_all(store: &AppStore) -> ClearOutcome {
    store.controller().write().clear_all()
}
