//! Board State Transitions
//!
//! Pure helpers behind the item board: tier ordering, bucket filtering,
//! optimistic tier reassignment and the transient voting flag. Kept free
//! of signals so drag reconciliation stays unit-testable.

use crate::models::{BoardItem, Item, Tier};

/// Tiers render in ascending position order.
pub fn sorted_tiers(mut tiers: Vec<Tier>) -> Vec<Tier> {
    tiers.sort_by_key(|t| t.position);
    tiers
}

/// Wrap fetched items with the voting flag cleared.
pub fn wrap_items(items: Vec<Item>) -> Vec<BoardItem> {
    items.into_iter().map(BoardItem::new).collect()
}

/// Items sitting in a bucket (`None` = unassigned area), render order.
pub fn items_in(items: &[BoardItem], bucket: Option<u32>) -> Vec<BoardItem> {
    items
        .iter()
        .filter(|b| b.item.tier_id == bucket)
        .cloned()
        .collect()
}

/// Optimistically move an item to a bucket. Returns the previous bucket
/// as a rollback snapshot, or `None` if the item is unknown.
pub fn assign_tier(items: &mut [BoardItem], item_id: u32, tier_id: Option<u32>) -> Option<Option<u32>> {
    let entry = items.iter_mut().find(|b| b.item.id == item_id)?;
    let previous = entry.item.tier_id;
    entry.item.tier_id = tier_id;
    Some(previous)
}

/// Arm or clear the voting UI flag for one item.
pub fn set_voting(items: &mut [BoardItem], item_id: u32, voting: bool) {
    if let Some(entry) = items.iter_mut().find(|b| b.item.id == item_id) {
        entry.voting = voting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, tier_id: Option<u32>) -> BoardItem {
        BoardItem::new(Item {
            id,
            tierlist_id: 1,
            tier_id,
            name: format!("Item {id}"),
            image_url: None,
            preview_url: None,
        })
    }

    fn make_tier(id: u32, position: i32) -> Tier {
        Tier {
            id,
            tierlist_id: 1,
            name: format!("Tier {id}"),
            colour: "#ffa500".to_string(),
            position,
        }
    }

    #[test]
    fn tiers_sort_by_ascending_position() {
        let tiers = vec![make_tier(1, 2), make_tier(2, 0), make_tier(3, 1)];
        let ids: Vec<u32> = sorted_tiers(tiers).iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn assign_from_unassigned_to_tier() {
        let mut items = vec![make_item(1, None), make_item(2, Some(5))];
        let prev = assign_tier(&mut items, 1, Some(5));
        assert_eq!(prev, Some(None));
        assert_eq!(items[0].item.tier_id, Some(5));
        // Untouched item keeps its bucket.
        assert_eq!(items[1].item.tier_id, Some(5));
    }

    #[test]
    fn assign_to_unassigned_sets_none() {
        let mut items = vec![make_item(1, Some(3))];
        let prev = assign_tier(&mut items, 1, None);
        assert_eq!(prev, Some(Some(3)));
        assert_eq!(items[0].item.tier_id, None);
    }

    #[test]
    fn assign_unknown_item_is_a_noop() {
        let mut items = vec![make_item(1, Some(3))];
        assert_eq!(assign_tier(&mut items, 99, None), None);
        assert_eq!(items[0].item.tier_id, Some(3));
    }

    #[test]
    fn rollback_restores_previous_bucket() {
        let mut items = vec![make_item(1, Some(3))];
        let prev = assign_tier(&mut items, 1, Some(7)).unwrap();
        // Persistence failed: undo with the snapshot.
        assign_tier(&mut items, 1, prev);
        assert_eq!(items[0].item.tier_id, Some(3));
    }

    #[test]
    fn bucket_filtering_matches_tier_ids() {
        let items = vec![make_item(1, None), make_item(2, Some(5)), make_item(3, Some(5))];
        let unassigned: Vec<u32> = items_in(&items, None).iter().map(|b| b.item.id).collect();
        let tiered: Vec<u32> = items_in(&items, Some(5)).iter().map(|b| b.item.id).collect();
        assert_eq!(unassigned, [1]);
        assert_eq!(tiered, [2, 3]);
    }

    #[test]
    fn voting_flag_arms_and_clears_per_item() {
        let mut items = vec![make_item(1, None), make_item(2, None)];
        set_voting(&mut items, 2, true);
        assert!(!items[0].voting);
        assert!(items[1].voting);
        set_voting(&mut items, 2, false);
        assert!(!items[1].voting);
    }
}
