//! # Wishlist Commands
//!
//! Selection and removal on the wishlist page, plus the hand-over of the
//! selected products to the cart.
//!
//! ## Wishlist to Cart
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Wishlist page                                 Cart                     │
//! │   ├── checkbox ──► toggle_wishlist_item()                               │
//! │   ├── 전체선택 ───► toggle_wishlist_select_all()                         │
//! │   ├── 삭제 ──────► remove_from_wishlist() / remove_selected_...()       │
//! │   └── 장바구니 담기 ─► move_selected_to_cart() ──► qty-1 lines,          │
//! │                                                  merged by id          │
//! │                                                                         │
//! │  The wishlist keeps its entries; all lines go in or none do.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{CoreError, LineItem, WishlistItem};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, Wishlist, WishlistState};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<WishlistItem>,
    pub selected_count: usize,
    pub all_selected: bool,
}

impl From<&Wishlist> for WishlistResponse {
    fn from(wishlist: &Wishlist) -> Self {
        WishlistResponse {
            items: wishlist.items.clone(),
            selected_count: wishlist.selected_count(),
            all_selected: wishlist.all_selected(),
        }
    }
}

pub fn get_wishlist(wishlist: &WishlistState) -> WishlistResponse {
    debug!("get_wishlist command");
    wishlist.with_wishlist(|w| WishlistResponse::from(w))
}

pub fn toggle_wishlist_item(
    wishlist: &WishlistState,
    item_id: &str,
) -> Result<WishlistResponse, ApiError> {
    debug!(item_id, "toggle_wishlist_item command");

    wishlist.with_wishlist_mut(|w| {
        if !w.toggle(item_id) {
            return Err(ApiError::from(CoreError::ItemNotFound(item_id.to_string())));
        }
        Ok::<WishlistResponse, ApiError>(WishlistResponse::from(&*w))
    })
}

pub fn toggle_wishlist_select_all(wishlist: &WishlistState) -> WishlistResponse {
    debug!("toggle_wishlist_select_all command");

    wishlist.with_wishlist_mut(|w| {
        let value = !w.all_selected();
        w.set_all_selected(value);
        WishlistResponse::from(&*w)
    })
}

pub fn remove_from_wishlist(
    wishlist: &WishlistState,
    item_id: &str,
) -> Result<WishlistResponse, ApiError> {
    debug!(item_id, "remove_from_wishlist command");

    wishlist.with_wishlist_mut(|w| {
        if !w.remove_item(item_id) {
            return Err(ApiError::from(CoreError::ItemNotFound(item_id.to_string())));
        }
        Ok::<WishlistResponse, ApiError>(WishlistResponse::from(&*w))
    })
}

/// Removes every selected entry; the select-all box ends up cleared.
pub fn remove_selected_from_wishlist(wishlist: &WishlistState) -> WishlistResponse {
    wishlist.with_wishlist_mut(|w| {
        let removed = w.remove_selected();
        debug!(removed, "remove_selected_from_wishlist command");
        WishlistResponse::from(&*w)
    })
}

/// Adds every selected wishlist entry to the cart as a quantity-1 line.
///
/// The wishlist itself is left as is. Returns the number of lines added.
/// If any line cannot be added (invalid, or a merge past the quantity
/// limit) the cart is left untouched.
pub fn move_selected_to_cart(
    wishlist: &WishlistState,
    cart: &CartState,
) -> Result<usize, ApiError> {
    let lines = wishlist
        .with_wishlist(|w| w.selected())
        .iter()
        .map(WishlistItem::to_line_item)
        .collect::<Result<Vec<LineItem>, _>>()
        .map_err(CoreError::from)?;

    let count = lines.len();
    debug!(count, "move_selected_to_cart command");
    cart.with_cart_mut(|c| {
        let mut next = c.clone();
        for line in lines {
            next.add_item(line)?;
        }
        *c = next;
        Ok::<(), CoreError>(())
    })?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use storefront_core::Won;

    fn setup() -> WishlistState {
        let items = ["1", "2"]
            .iter()
            .map(|id| WishlistItem {
                id: id.to_string(),
                title: format!("Product {}", id),
                seller: "우체국택배".to_string(),
                unit_price: Won::new(28_100),
                original_unit_price: Some(Won::new(33_000)),
                is_selected: false,
                added_on: NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
            })
            .collect();
        WishlistState::from_wishlist(Wishlist::with_items(items))
    }

    #[test]
    fn test_toggle_and_select_all() {
        let wl = setup();
        let resp = toggle_wishlist_item(&wl, "1").unwrap();
        assert_eq!(resp.selected_count, 1);
        assert!(!resp.all_selected);

        let resp = toggle_wishlist_select_all(&wl);
        assert!(resp.all_selected);

        let resp = toggle_wishlist_select_all(&wl);
        assert_eq!(resp.selected_count, 0);
    }

    #[test]
    fn test_remove() {
        let wl = setup();
        let resp = remove_from_wishlist(&wl, "1").unwrap();
        assert_eq!(resp.items.len(), 1);

        let err = remove_from_wishlist(&wl, "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        toggle_wishlist_select_all(&wl);
        let resp = remove_selected_from_wishlist(&wl);
        assert!(resp.items.is_empty());
        assert!(!resp.all_selected);
    }

    #[test]
    fn test_move_selected_to_cart() {
        let wl = setup();
        let cart = CartState::new();

        assert_eq!(move_selected_to_cart(&wl, &cart).unwrap(), 0);
        assert!(cart.with_cart(|c| c.is_empty()));

        toggle_wishlist_item(&wl, "2").unwrap();
        assert_eq!(move_selected_to_cart(&wl, &cart).unwrap(), 1);
        cart.with_cart(|c| {
            assert_eq!(c.item_count(), 1);
            assert_eq!(c.items[0].id, "2");
            assert_eq!(c.items[0].quantity, 1);
        });

        // Moving again merges into the existing line.
        move_selected_to_cart(&wl, &cart).unwrap();
        cart.with_cart(|c| assert_eq!(c.items[0].quantity, 2));
        assert_eq!(get_wishlist(&wl).items.len(), 2);
    }

    #[test]
    fn test_move_is_all_or_nothing() {
        let wl = setup();
        toggle_wishlist_select_all(&wl);

        let full = LineItem::builder("2", 28_100)
            .quantity(storefront_core::MAX_ITEM_QUANTITY)
            .build()
            .unwrap();
        let cart = CartState::from_cart(crate::state::Cart::with_items(vec![full]).unwrap());

        let err = move_selected_to_cart(&wl, &cart).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        cart.with_cart(|c| {
            assert_eq!(c.item_count(), 1);
            assert!(!c.contains("1"));
        });
    }
}
