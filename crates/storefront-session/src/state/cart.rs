//! # Cart State
//!
//! Holds the authoritative cart for one browsing session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  View Action              Command                  Cart Change          │
//! │  ───────────              ───────                  ───────────          │
//! │  Add from wishlist ─────► add_to_cart() ─────────► push / merge qty    │
//! │  − / + / type ──────────► update_cart_item() ────► set_quantity        │
//! │  Checkbox ──────────────► toggle_cart_item() ────► toggle_selection    │
//! │  전체선택 ───────────────► toggle_select_all() ───► set_all_selected    │
//! │  Trash ─────────────────► remove_from_cart() ────► remove_item         │
//! │  선택상품 삭제 ───────────► remove_selected_...() ─► remove_selected     │
//! │  View cart ─────────────► get_cart() ────────────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::validation::{validate_quantity, ValidationResult};
use storefront_core::{
    cart, compute_summary_with, LineItem, OrderSummary, Selection, ShippingPolicy,
};

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same id again increases quantity)
/// - Every line passes `LineItem::validate`, so quantities stay in 1..=999
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<LineItem>,

    /// When the cart was created or last cleared
    pub created_at: DateTime<Utc>,
}

impl Cart {
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Starts a cart with pre-seeded lines (the view's initial state).
    pub fn with_items(items: Vec<LineItem>) -> ValidationResult<Self> {
        let mut cart = Cart::new();
        for item in items {
            cart.add_item(item)?;
        }
        Ok(cart)
    }

    /// Adds a line, or increases the quantity of the line with the same id.
    ///
    /// The line is re-validated first. A merge that would push the quantity
    /// past the limit is rejected and leaves the cart unchanged.
    pub fn add_item(&mut self, item: LineItem) -> ValidationResult<()> {
        item.validate()?;

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let merged = existing.quantity.saturating_add(item.quantity);
            validate_quantity(merged)?;
            existing.quantity = merged;
            return Ok(());
        }
        self.items.push(item);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Applies a quantity change; values below 1 are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> bool {
        cart::set_quantity(&mut self.items, id, quantity)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        cart::toggle_selection(&mut self.items, id)
    }

    pub fn set_all_selected(&mut self, value: bool) {
        cart::set_all_selected(&mut self.items, value);
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        cart::remove_item(&mut self.items, id)
    }

    pub fn remove_selected(&mut self) -> usize {
        cart::remove_selected(&mut self.items)
    }

    pub fn all_selected(&self) -> bool {
        cart::all_selected(&self.items)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Totals for the selected lines, as the summary box shows them.
    pub fn summary(&self, policy: &ShippingPolicy) -> OrderSummary {
        compute_summary_with(&self.items, Selection::Selected, policy)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

/// Session-owned cart state.
///
/// `Arc<Mutex<Cart>>` so that command handlers dispatched from the view's
/// event loop get exclusive access.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    pub fn new() -> Self {
        CartState::from_cart(Cart::new())
    }

    pub fn from_cart(cart: Cart) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(|e| e.into_inner());
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{ValidationError, Won};

    fn line(id: &str, price: i64) -> LineItem {
        LineItem::builder(id, price).build().unwrap()
    }

    #[test]
    fn test_add_same_id_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 28_100)).unwrap();
        cart.add_item(line("1", 28_100)).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_merge_past_quantity_limit_rejected() {
        let big = |qty| LineItem::builder("1", 1_000).quantity(qty).build().unwrap();
        let mut cart = Cart::new();
        cart.add_item(big(900)).unwrap();

        let err = cart.add_item(big(200)).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
        assert_eq!(cart.items[0].quantity, 900);

        // A hand-built line far past the limit never reaches the merge.
        let mut wild = big(1);
        wild.quantity = i64::MAX;
        assert!(cart.add_item(wild).is_err());
        assert_eq!(cart.items[0].quantity, 900);
    }

    #[test]
    fn test_add_rejects_invalid_line() {
        let mut item = line("1", 5_000);
        item.original_unit_price = Some(Won::new(1_000));

        let mut cart = Cart::new();
        assert!(matches!(
            cart.add_item(item),
            Err(ValidationError::OriginalBelowPrice { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_summary_uses_selected_lines() {
        let mut cart = Cart::with_items(vec![line("1", 28_100), line("2", 10_000)]).unwrap();
        let policy = ShippingPolicy::default();

        assert_eq!(cart.summary(&policy).subtotal, Won::new(38_100));
        assert_eq!(cart.summary(&policy).shipping_fee, Won::zero());

        cart.toggle("2");
        assert_eq!(cart.summary(&policy).subtotal, Won::new(28_100));
        assert_eq!(cart.summary(&policy).shipping_fee, Won::new(4_900));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::with_items(vec![line("1", 1_000)]).unwrap();
        assert!(!cart.is_empty());
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_state_shares_cart_between_clones() {
        let state = CartState::new();
        let other = state.clone();
        state.with_cart_mut(|c| c.add_item(line("1", 1_000))).unwrap();
        assert_eq!(other.with_cart(|c| c.item_count()), 1);
    }
}
