//! New Item Draft
//!
//! Field values of the add-item form between keystrokes.

use super::error::DomainResult;
use super::id::IdSource;
use super::item::{Item, Quantity};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub description: String,
    pub quantity: Quantity,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the quantity from a select value; keeps the old one on error
    pub fn set_quantity_str(&mut self, raw: &str) -> DomainResult<()> {
        self.quantity = Quantity::parse(raw)?;
        Ok(())
    }

    /// Build the item and reset the draft to its defaults.
    /// An empty description is allowed.
    pub fn submit(&mut self, ids: &mut impl IdSource) -> Item {
        let draft = std::mem::take(self);
        Item::new(ids.next_id(), draft.description, draft.quantity)
    }
}
