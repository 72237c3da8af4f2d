//! Packing List Controller
//!
//! Owns the canonical list and applies the user's add, delete, toggle
//! and clear actions to it. Each accepted action swaps in a new list value.

use super::confirm::Confirm;
use super::error::DomainResult;
use super::item::{Item, ItemId};
use super::list::PackingList;

/// Question asked before the whole list is dropped
pub const CLEAR_LIST_PROMPT: &str = "Are you sure you want to delete all items in your list?";

/// Result of a clear-all request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    Declined,
}

/// Single source of truth for the packing list
#[derive(Debug, Clone, Default)]
pub struct PackingController<C> {
    list: PackingList,
    confirm: C,
}

impl<C: Confirm> PackingController<C> {
    /// Start with an empty list
    pub fn new(confirm: C) -> Self {
        Self {
            list: PackingList::new(),
            confirm,
        }
    }

    pub fn list(&self) -> &PackingList {
        &self.list
    }

    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    /// Append `item` at the end of the list
    pub fn add_item(&mut self, item: Item) -> DomainResult<()> {
        log::debug!("add item {} ({:?} x{})", item.id, item.description, item.quantity);
        self.list = self.list.with_item(item)?;
        Ok(())
    }

    /// Remove item `id`; no-op if it is not in the list
    pub fn delete_item(&mut self, id: ItemId) {
        if !self.list.contains(id) {
            log::debug!("delete item {}: not in list", id);
            return;
        }
        log::debug!("delete item {}", id);
        self.list = self.list.without(id);
    }

    /// Flip the packed flag of item `id`; no-op if it is not in the list
    pub fn toggle_packed(&mut self, id: ItemId) {
        if !self.list.contains(id) {
            log::debug!("toggle item {}: not in list", id);
            return;
        }
        log::debug!("toggle item {}", id);
        self.list = self.list.with_toggled(id);
    }

    /// Empty the list after the user confirms
    pub fn clear_all(&mut self) -> ClearOutcome {
        if !self.confirm.confirm(CLEAR_LIST_PROMPT) {
            log::debug!("clear list declined");
            return ClearOutcome::Declined;
        }
        log::info!("clearing {} items", self.list.len());
        self.list = PackingList::new();
        ClearOutcome::Cleared
    }
}
