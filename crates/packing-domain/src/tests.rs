//! Controller Scenario Tests
//!
//! End-to-end runs of user actions through the controller.

#[cfg(test)]
mod tests {
    use crate::{
        ClearOutcome, DefaultCollator, FixedConfirm, FormDraft, IdSource, Item, ItemId,
        PackingController, PackingStats, Quantity, SequentialIds, SortMode, StatsSummary,
    };

    fn controller_with(descriptions: &[&str], confirm: bool) -> PackingController<FixedConfirm> {
        let mut ids = SequentialIds::new();
        let mut controller = PackingController::new(FixedConfirm(confirm));
        for description in descriptions {
            let item = Item::new(ids.next_id(), *description, Quantity::MIN);
            controller.add_item(item).expect("Failed to add");
        }
        controller
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn test_adds_keep_every_field() {
        let mut ids = SequentialIds::new();
        let mut controller = PackingController::new(FixedConfirm(true));
        let mut added = Vec::new();
        for n in 1..=20u8 {
            let item = Item::new(ids.next_id(), format!("thing {}", n), Quantity::new(n).unwrap());
            added.push(item.clone());
            controller.add_item(item).expect("Failed to add");
        }

        assert_eq!(controller.items().len(), 20);
        assert_eq!(controller.items(), added.as_slice());
    }

    #[test]
    fn test_delete_twice_is_idempotent() {
        let mut controller = controller_with(&["Socks", "Hat", "Map"], true);
        controller.delete_item(ItemId(2));
        let after_first = controller.list().clone();
        controller.delete_item(ItemId(2));

        assert_eq!(controller.list(), &after_first);
        assert_eq!(ids(controller.items()), vec![1, 3]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut controller = controller_with(&["Socks", "Hat"], true);
        let before = controller.list().clone();

        controller.toggle_packed(ItemId(1));
        assert!(controller.list().get(ItemId(1)).unwrap().packed);
        assert!(!controller.list().get(ItemId(2)).unwrap().packed);

        controller.toggle_packed(ItemId(1));
        assert_eq!(controller.list(), &before);
    }

    #[test]
    fn test_description_sort_is_non_destructive() {
        let controller = controller_with(&["Toothbrush", "charger", "Adapter"], true);
        let list = controller.list();

        let by_description = list.sorted(SortMode::Description, &DefaultCollator);
        assert_eq!(ids(&by_description), vec![3, 2, 1]);

        let input = list.sorted(SortMode::Input, &DefaultCollator);
        assert_eq!(ids(&input), vec![1, 2, 3]);
    }

    #[test]
    fn test_packed_sort_groups_unpacked_first() {
        let mut controller = controller_with(&["a", "b", "c", "d", "e", "f"], true);
        controller.toggle_packed(ItemId(1));
        controller.toggle_packed(ItemId(4));
        controller.toggle_packed(ItemId(5));

        let view = controller.list().sorted(SortMode::Packed, &DefaultCollator);
        assert_eq!(ids(&view), vec![2, 3, 6, 1, 4, 5]);
        let split = view.iter().position(|i| i.packed).unwrap();
        assert!(view[..split].iter().all(|i| !i.packed));
        assert!(view[split..].iter().all(|i| i.packed));
    }

    #[test]
    fn test_stats_through_controller() {
        let mut controller = controller_with(&[], true);
        assert_eq!(controller.list().stats(), StatsSummary::Empty);

        let mut controller_four = controller_with(&["a", "b", "c", "d"], true);
        controller_four.toggle_packed(ItemId(1));
        controller_four.toggle_packed(ItemId(3));
        assert_eq!(
            controller_four.list().stats(),
            StatsSummary::InProgress(PackingStats { num_items: 4, num_packed: 2, percent: 50 })
        );

        controller = controller_with(&["a", "b", "c"], true);
        controller.toggle_packed(ItemId(1));
        controller.toggle_packed(ItemId(2));
        assert!(matches!(controller.list().stats(), StatsSummary::InProgress(_)));
        controller.toggle_packed(ItemId(3));
        assert!(matches!(controller.list().stats(), StatsSummary::Complete(_)));
    }

    #[test]
    fn test_clear_declined_keeps_list() {
        let mut controller = controller_with(&["Socks", "Hat"], false);
        controller.toggle_packed(ItemId(2));
        let before = controller.list().clone();

        assert_eq!(controller.clear_all(), ClearOutcome::Declined);
        assert_eq!(controller.list(), &before);
    }

    #[test]
    fn test_clear_accepted_empties_list() {
        let mut controller = controller_with(&["Socks", "Hat"], true);
        assert_eq!(controller.clear_all(), ClearOutcome::Cleared);
        assert!(controller.list().is_empty());
        assert_eq!(controller.list().stats(), StatsSummary::Empty);
    }

    #[test]
    fn test_add_toggle_delete_leaves_nothing() {
        let mut ids = SequentialIds::new();
        let mut controller = PackingController::new(FixedConfirm(true));
        let mut draft = FormDraft {
            description: "Socks".to_string(),
            quantity: Quantity::new(5).unwrap(),
        };

        let item = draft.submit(&mut ids);
        let id = item.id;
        controller.add_item(item).expect("Failed to add");
        controller.toggle_packed(id);
        controller.delete_item(id);

        assert!(controller.list().is_empty());
        assert!(!controller.list().contains(id));
    }
}
