//! # Wishlist State
//!
//! Saved products. Shares selection and removal with the cart; the only
//! wishlist-specific action is moving the selection into the cart.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use storefront_core::{cart, WishlistItem};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn with_items(items: Vec<WishlistItem>) -> Self {
        Wishlist { items }
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        cart::toggle_selection(&mut self.items, id)
    }

    pub fn set_all_selected(&mut self, value: bool) {
        cart::set_all_selected(&mut self.items, value);
    }

    pub fn all_selected(&self) -> bool {
        cart::all_selected(&self.items)
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        cart::remove_item(&mut self.items, id)
    }

    pub fn remove_selected(&mut self) -> usize {
        cart::remove_selected(&mut self.items)
    }

    pub fn selected_count(&self) -> usize {
        cart::selected_count(&self.items)
    }

    pub fn selected(&self) -> Vec<WishlistItem> {
        cart::selected_items(&self.items)
    }
}

/// Session-owned wishlist state.
#[derive(Debug, Clone, Default)]
pub struct WishlistState {
    wishlist: Arc<Mutex<Wishlist>>,
}

impl WishlistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_wishlist(wishlist: Wishlist) -> Self {
        WishlistState {
            wishlist: Arc::new(Mutex::new(wishlist)),
        }
    }

    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.wishlist.lock().unwrap_or_else(|e| e.into_inner());
        f(&wishlist)
    }

    pub fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R,
    {
        let mut wishlist = self.wishlist.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut wishlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use storefront_core::Won;

    fn wish(id: &str, selected: bool) -> WishlistItem {
        WishlistItem {
            id: id.to_string(),
            title: format!("Product {}", id),
            seller: "우체국택배".to_string(),
            unit_price: Won::new(28_100),
            original_unit_price: None,
            is_selected: selected,
            added_on: NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
        }
    }

    #[test]
    fn test_remove_selected() {
        let mut wl = Wishlist::with_items(vec![wish("1", true), wish("2", false), wish("3", true)]);
        assert_eq!(wl.selected_count(), 2);
        assert_eq!(wl.remove_selected(), 2);
        assert_eq!(wl.items.len(), 1);
        assert_eq!(wl.items[0].id, "2");
    }

    #[test]
    fn test_select_all() {
        let mut wl = Wishlist::with_items(vec![wish("1", false), wish("2", false)]);
        assert!(!wl.all_selected());
        wl.set_all_selected(true);
        assert!(wl.all_selected());
        assert_eq!(wl.selected().len(), 2);
    }
}
