//! # Checkout Commands
//!
//! Moving from cart to checkout and placing the (stub) order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart page                                                              │
//! │   ├── "선택상품 주문하기" ──► order_selected() ─┐                         │
//! │   └── "전체상품 주문하기" ──► order_all() ──────┤                         │
//! │                                              ▼                          │
//! │                                     CheckoutRequest (JSON)              │
//! │                                              │                          │
//! │  Checkout page                               ▼                          │
//! │   └── receive_checkout() ──► recompute totals, warn on mismatch         │
//! │                                              │                          │
//! │   "결제하기" ──► place_order() ──► log + receipt (no payment taken)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::checkout::CheckoutRequest;
use storefront_core::validation::ValidationResult;
use storefront_core::{compute_summary_with, CoreError, Selection, ValidationError, Won};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState};

/// Builds the hand-off for the selected cart lines.
pub fn order_selected(cart: &CartState, config: &ConfigState) -> Result<CheckoutRequest, ApiError> {
    debug!("order_selected command");
    start_checkout(cart, config, Selection::Selected)
}

/// Builds the hand-off for every cart line, regardless of checkboxes.
pub fn order_all(cart: &CartState, config: &ConfigState) -> Result<CheckoutRequest, ApiError> {
    debug!("order_all command");
    start_checkout(cart, config, Selection::All)
}

fn start_checkout(
    cart: &CartState,
    config: &ConfigState,
    selection: Selection,
) -> Result<CheckoutRequest, ApiError> {
    let policy = config.shipping_policy();
    let request =
        cart.with_cart(|c| CheckoutRequest::from_items_with(&c.items, selection, &policy))?;
    debug!(
        lines = request.items.len(),
        final_amount = request.summary.final_amount.amount(),
        "checkout started"
    );
    Ok(request)
}

/// Decodes the hand-off on the checkout page.
///
/// Totals are always recomputed from the lines; a disagreement with the
/// totals the cart sent is logged and the recomputed figures win.
pub fn receive_checkout(json: &str, config: &ConfigState) -> Result<CheckoutRequest, ApiError> {
    debug!(bytes = json.len(), "receive_checkout command");

    let received = CheckoutRequest::from_json_with(json, &config.shipping_policy())?;
    if !received.totals_match() {
        warn!(
            claimed = ?received.claimed,
            recomputed = ?received.request.summary,
            "checkout totals disagree with cart, using recomputed totals"
        );
    }
    Ok(received.request)
}

/// Orderer details from the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orderer {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
}

impl Orderer {
    fn validate(&self) -> ValidationResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// What the order-complete view shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub line_count: usize,
    pub final_amount: Won,
    pub reward_points: i64,
}

/// Places the order. There is no payment integration: the order is logged
/// and a receipt returned.
///
/// Every line is re-validated and the totals are recomputed under the
/// configured policy. The receipt always carries the recomputed figures; a
/// request whose own summary disagrees is logged.
pub fn place_order(
    request: &CheckoutRequest,
    orderer: &Orderer,
    config: &ConfigState,
) -> Result<OrderReceipt, ApiError> {
    orderer.validate().map_err(CoreError::from)?;
    if request.items.is_empty() {
        return Err(CoreError::EmptyCheckout.into());
    }
    for item in &request.items {
        item.validate().map_err(CoreError::from)?;
    }

    let policy = config.shipping_policy();
    let summary = compute_summary_with(&request.items, Selection::All, &policy);
    if summary != request.summary {
        warn!(
            claimed = ?request.summary,
            recomputed = ?summary,
            "order totals disagree with lines, using recomputed totals"
        );
    }

    let receipt = OrderReceipt {
        order_id: Uuid::new_v4(),
        placed_at: Utc::now(),
        line_count: request.items.len(),
        final_amount: summary.final_amount,
        reward_points: summary.total_reward_points,
    };

    info!(
        order_id = %receipt.order_id,
        orderer = %orderer.name,
        lines = receipt.line_count,
        final_amount = %receipt.final_amount,
        "order placed"
    );
    Ok(receipt)
}
