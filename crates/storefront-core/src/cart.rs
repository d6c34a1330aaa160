//! # Cart List Operations
//!
//! Transformations the cart and wishlist views apply to their collections.
//! The owning view keeps the authoritative `Vec` and calls these on every
//! user interaction; nothing here holds state.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User Action              Function              Effect                  │
//! │  ───────────              ────────              ──────                  │
//! │  − / + / type quantity ─► set_quantity() ─────► items[id].quantity = n  │
//! │                                                  (n < 1 ignored)        │
//! │  Tick checkbox ─────────► toggle_selection() ─► flip items[id]          │
//! │  Tick "전체선택" ────────► set_all_selected() ─► every item = value      │
//! │  Trash icon ────────────► remove_item() ──────► drop items[id]          │
//! │  "선택상품 삭제" ─────────► remove_selected() ──► drop all selected       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation preserves the relative order of the remaining items.

use crate::types::{LineItem, Selectable};
use crate::MAX_ITEM_QUANTITY;

/// Replaces the quantity of the line with `id`.
///
/// A `new_quantity` below 1 is silently ignored, matching the "−" button at
/// quantity 1. So is one above [`MAX_ITEM_QUANTITY`]. Returns `true` if the
/// list changed.
///
/// ```rust
/// use storefront_core::cart::set_quantity;
/// use storefront_core::types::LineItem;
///
/// let mut items = vec![LineItem::builder("1", 28_100).build().unwrap()];
/// assert!(set_quantity(&mut items, "1", 2));
/// assert!(!set_quantity(&mut items, "1", 0));
/// assert_eq!(items[0].quantity, 2);
/// ```
pub fn set_quantity(items: &mut [LineItem], id: &str, new_quantity: i64) -> bool {
    if !(1..=MAX_ITEM_QUANTITY).contains(&new_quantity) {
        return false;
    }

    match items.iter_mut().find(|i| i.id == id) {
        Some(item) if item.quantity != new_quantity => {
            item.quantity = new_quantity;
            true
        }
        _ => false,
    }
}

/// Flips the selection of the entry with `id`. Returns `true` if found.
pub fn toggle_selection<T: Selectable>(items: &mut [T], id: &str) -> bool {
    match items.iter_mut().find(|i| i.id() == id) {
        Some(item) => {
            let flipped = !item.is_selected();
            item.set_selected(flipped);
            true
        }
        None => false,
    }
}

/// Sets every entry's selection to `value`.
pub fn set_all_selected<T: Selectable>(items: &mut [T], value: bool) {
    for item in items.iter_mut() {
        item.set_selected(value);
    }
}

/// Removes the entry with `id`. Returns `true` if something was removed.
pub fn remove_item<T: Selectable>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|i| i.id() != id);
    items.len() != before
}

/// Removes every selected entry and returns how many were dropped.
pub fn remove_selected<T: Selectable>(items: &mut Vec<T>) -> usize {
    let before = items.len();
    items.retain(|i| !i.is_selected());
    before - items.len()
}

/// Number of selected entries.
pub fn selected_count<T: Selectable>(items: &[T]) -> usize {
    items.iter().filter(|i| i.is_selected()).count()
}

/// Whether the select-all checkbox should render ticked.
///
/// An empty list is never "all selected".
pub fn all_selected<T: Selectable>(items: &[T]) -> bool {
    !items.is_empty() && items.iter().all(|i| i.is_selected())
}

/// Clones the selected entries, in list order.
pub fn selected_items<T: Selectable + Clone>(items: &[T]) -> Vec<T> {
    items.iter().filter(|i| i.is_selected()).cloned().collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{compute_summary, Selection};

    fn cart() -> Vec<LineItem> {
        vec![
            LineItem::builder("1", 28_100)
                .original_unit_price(33_000)
                .reward_points(300)
                .build()
                .unwrap(),
            LineItem::builder("2", 12_000)
                .quantity(2)
                .reward_points(100)
                .build()
                .unwrap(),
            LineItem::builder("3", 5_500)
                .selected(false)
                .build()
                .unwrap(),
        ]
    }

    #[test]
    fn test_set_quantity_replaces_only_target() {
        let mut items = cart();
        assert!(set_quantity(&mut items, "2", 5));

        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[1].quantity, 5);
        assert_eq!(items[2].quantity, 1);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_set_quantity_below_one_is_noop() {
        let mut items = cart();
        let original = items.clone();

        assert!(!set_quantity(&mut items, "1", 0));
        assert!(!set_quantity(&mut items, "1", -1));
        assert!(!set_quantity(&mut items, "2", i64::MIN));
        assert_eq!(items, original);
    }

    #[test]
    fn test_set_quantity_above_limit_is_noop() {
        let mut items = cart();
        let original = items.clone();

        assert!(!set_quantity(&mut items, "1", MAX_ITEM_QUANTITY + 1));
        assert!(!set_quantity(&mut items, "1", i64::MAX));
        assert_eq!(items, original);
        assert!(set_quantity(&mut items, "1", MAX_ITEM_QUANTITY));
    }

    #[test]
    fn test_set_quantity_unknown_id() {
        let mut items = cart();
        let original = items.clone();
        assert!(!set_quantity(&mut items, "missing", 3));
        assert_eq!(items, original);
    }

    #[test]
    fn test_toggle_selection_flips_one() {
        let mut items = cart();
        assert!(toggle_selection(&mut items, "1"));
        assert!(!items[0].is_selected);
        assert!(items[1].is_selected);
        assert!(!items[2].is_selected);

        assert!(!toggle_selection(&mut items, "missing"));
    }

    #[test]
    fn test_double_toggle_restores_summary() {
        let mut items = cart();
        let before = compute_summary(&items, Selection::Selected);

        for id in ["1", "2", "3"] {
            toggle_selection(&mut items, id);
            assert_ne!(compute_summary(&items, Selection::Selected), before);
            toggle_selection(&mut items, id);
            assert_eq!(compute_summary(&items, Selection::Selected), before);
        }
    }

    #[test]
    fn test_set_all_selected() {
        let mut items = cart();
        assert!(!all_selected(&items));

        set_all_selected(&mut items, true);
        assert!(all_selected(&items));
        assert_eq!(selected_count(&items), 3);
        assert_eq!(
            compute_summary(&items, Selection::Selected),
            compute_summary(&items, Selection::All)
        );

        set_all_selected(&mut items, false);
        assert_eq!(selected_count(&items), 0);
        assert_eq!(
            compute_summary(&items, Selection::Selected).final_amount,
            crate::FLAT_SHIPPING_FEE
        );
    }

    #[test]
    fn test_all_selected_empty_list() {
        let items: Vec<LineItem> = Vec::new();
        assert!(!all_selected(&items));
    }

    #[test]
    fn test_remove_item() {
        let mut items = cart();
        assert!(remove_item(&mut items, "2"));
        assert!(!remove_item(&mut items, "2"));
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_remove_selected() {
        let mut items = cart();
        assert_eq!(remove_selected(&mut items), 2);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "3");
        assert_eq!(remove_selected(&mut items), 0);
    }

    #[test]
    fn test_selected_items_keeps_order() {
        let items = cart();
        let picked = selected_items(&items);
        let ids: Vec<&str> = picked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }
}
