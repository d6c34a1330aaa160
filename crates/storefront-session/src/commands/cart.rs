//! # Cart Commands
//!
//! Commands for cart manipulation. Each returns the whole cart together
//! with freshly computed totals, so the view re-renders from one response.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   page   │     │  (stub)  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 ▲                              │
//! │                   update_cart_item  order_selected                     │
//! │                   toggle_cart_item  order_all                          │
//! │                   remove_from_cart  (checkout.rs)                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────► (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::validation::{coerce_quantity_input, validate_quantity};
use storefront_core::{CoreError, LineItem, OrderSummary, ShippingPolicy, MAX_ITEM_QUANTITY};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{Cart, CartState, ConfigState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub summary: OrderSummary,
    /// Drives the "전체선택" checkbox
    pub all_selected: bool,
}

impl CartResponse {
    pub fn from_cart(cart: &Cart, policy: &ShippingPolicy) -> Self {
        CartResponse {
            items: cart.items.clone(),
            summary: cart.summary(policy),
            all_selected: cart.all_selected(),
        }
    }
}

fn respond(cart: &Cart, config: &ConfigState) -> CartResponse {
    CartResponse::from_cart(cart, &config.shipping_policy())
}

fn require_item(cart: &Cart, id: &str) -> Result<(), ApiError> {
    if cart.contains(id) {
        Ok(())
    } else {
        Err(CoreError::ItemNotFound(id.to_string()).into())
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │  결제예상금액                                                   │
/// │  총 상품금액                                    33,000원        │
/// │  총 할인금액                                    -4,900원        │
/// │  배송비                                          4,900원        │
/// │  ─────────────────────────────────────────────────────         │
/// │  총 결제금액                                    33,000원        │
/// │  총 적립예정                                       300원        │
/// └────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| respond(c, config))
}

/// Adds a line to the cart, merging with an existing line of the same id.
///
/// ## Errors
/// `VALIDATION_ERROR` if the line breaks an invariant or the merged quantity
/// would exceed the limit. The cart is unchanged.
pub fn add_to_cart(
    cart: &CartState,
    config: &ConfigState,
    item: LineItem,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item.id, quantity = item.quantity, "add_to_cart command");

    cart.with_cart_mut(|c| {
        c.add_item(item).map_err(CoreError::from)?;
        Ok::<CartResponse, ApiError>(respond(c, config))
    })
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity below 1: ignored, cart returned unchanged
/// - Quantity above 999: `VALIDATION_ERROR`
/// - Unknown id: `NOT_FOUND`
pub fn update_cart_item(
    cart: &CartState,
    config: &ConfigState,
    item_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(item_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        require_item(c, item_id)?;
        if quantity > MAX_ITEM_QUANTITY {
            validate_quantity(quantity).map_err(CoreError::from)?;
        }
        if !c.update_quantity(item_id, quantity) {
            debug!(item_id, quantity, "quantity unchanged");
        }
        Ok::<CartResponse, ApiError>(respond(c, config))
    })
}

/// Sets the quantity from the raw text of the quantity box.
///
/// Unparsable text counts as 1.
pub fn update_cart_item_input(
    cart: &CartState,
    config: &ConfigState,
    item_id: &str,
    input: &str,
) -> Result<CartResponse, ApiError> {
    update_cart_item(cart, config, item_id, coerce_quantity_input(input))
}

/// Flips the checkbox of one line.
pub fn toggle_cart_item(
    cart: &CartState,
    config: &ConfigState,
    item_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(item_id, "toggle_cart_item command");

    cart.with_cart_mut(|c| {
        if !c.toggle(item_id) {
            return Err(ApiError::from(CoreError::ItemNotFound(item_id.to_string())));
        }
        Ok::<CartResponse, ApiError>(respond(c, config))
    })
}

/// Handles a click on "전체선택".
///
/// A ticked box clears every line, anything else selects every line.
pub fn toggle_select_all(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("toggle_select_all command");

    cart.with_cart_mut(|c| {
        let value = !c.all_selected();
        c.set_all_selected(value);
        respond(c, config)
    })
}

/// Removes one line from the cart.
pub fn remove_from_cart(
    cart: &CartState,
    config: &ConfigState,
    item_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(item_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        if !c.remove_item(item_id) {
            return Err(ApiError::from(CoreError::ItemNotFound(item_id.to_string())));
        }
        Ok::<CartResponse, ApiError>(respond(c, config))
    })
}

/// Removes every selected line ("선택상품 삭제").
pub fn remove_selected_from_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    cart.with_cart_mut(|c| {
        let removed = c.remove_selected();
        debug!(removed, "remove_selected_from_cart command");
        respond(c, config)
    })
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        respond(c, config)
    })
}
