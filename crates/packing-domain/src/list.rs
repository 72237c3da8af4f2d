//! Packing List Collection
//!
//! Ordered items in input order. Every change returns a new list value;
//! the receiver is left as it was.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use super::item::{Item, ItemId};
use super::sort::{sorted_view, Collator, SortMode};
use super::stats::StatsSummary;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingList {
    items: Vec<Item>,
}

impl PackingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// List with `item` appended; rejects an id that is already present
    pub fn with_item(&self, item: Item) -> DomainResult<Self> {
        if self.contains(item.id) {
            return Err(DomainError::Conflict(format!("item {} already exists", item.id)));
        }
        let mut items = self.items.clone();
        items.push(item);
        Ok(Self { items })
    }

    /// List without the item `id`; unchanged copy if absent
    pub fn without(&self, id: ItemId) -> Self {
        Self {
            items: self.items.iter().filter(|item| item.id != id).cloned().collect(),
        }
    }

    /// List with item `id` packed state flipped; unchanged copy if absent
    pub fn with_toggled(&self, id: ItemId) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|item| if item.id == id { item.toggled() } else { item.clone() })
                .collect(),
        }
    }

    pub fn sorted<C: Collator + ?Sized>(&self, mode: SortMode, collator: &C) -> Cow<'_, [Item]> {
        sorted_view(&self.items, mode, collator)
    }

    pub fn stats(&self) -> StatsSummary {
        StatsSummary::of(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Quantity;
    use crate::sort::DefaultCollator;

    fn make_item(id: u64, description: &str) -> Item {
        Item::new(ItemId(id), description, Quantity::MIN)
    }

    #[test]
    fn test_with_item_appends() {
        let empty = PackingList::new();
        let one = empty.with_item(make_item(1, "Socks")).unwrap();
        let two = one.with_item(make_item(2, "Hat")).unwrap();

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.items()[1].description, "Hat");
    }

    #[test]
    fn test_with_item_rejects_duplicate_id() {
        let list = PackingList::new().with_item(make_item(1, "Socks")).unwrap();
        let err = list.with_item(make_item(1, "Other")).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_without() {
        let list = PackingList::new()
            .with_item(make_item(1, "a")).unwrap()
            .with_item(make_item(2, "b")).unwrap();
        let removed = list.without(ItemId(1));
        assert_eq!(removed.len(), 1);
        assert!(!removed.contains(ItemId(1)));
        assert_eq!(list.len(), 2);
        assert_eq!(removed.without(ItemId(99)), removed);
    }

    #[test]
    fn test_with_toggled() {
        let list = PackingList::new().with_item(make_item(1, "a")).unwrap();
        let toggled = list.with_toggled(ItemId(1));
        assert!(toggled.get(ItemId(1)).unwrap().packed);
        assert!(!list.get(ItemId(1)).unwrap().packed);
        assert_eq!(list.with_toggled(ItemId(42)), list);
    }

    #[test]
    fn test_sorted_leaves_list_alone() {
        let list = PackingList::new()
            .with_item(make_item(1, "zebra")).unwrap()
            .with_item(make_item(2, "apple")).unwrap();
        let by_description = list.sorted(SortMode::Description, &DefaultCollator);
        assert_eq!(by_description[0].id, ItemId(2));
        let input = list.sorted(SortMode::Input, &DefaultCollator);
        assert_eq!(input[0].id, ItemId(1));
    }
}
