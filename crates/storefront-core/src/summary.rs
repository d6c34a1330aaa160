//! # Order Total Calculator
//!
//! Computes the figures shown in the cart's "결제예상금액" box, the cart
//! summary widget and the checkout payment panel.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► filter(Selection) ──┬──► Σ unit_price × qty      = subtotal  │
//! │                                ├──► Σ original × qty        = original  │
//! │                                └──► Σ reward_points         = points    │
//! │                                                                         │
//! │  discount     = original − subtotal                                    │
//! │  shipping_fee = subtotal >= 33,000 ? 0 : 4,900                         │
//! │  final_amount = subtotal + shipping_fee                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty selection still pays the flat fee: 0 is below the threshold.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Won;
use crate::types::LineItem;

// =============================================================================
// Constants
// =============================================================================

/// Subtotal at or above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: Won = Won::new(33_000);

/// Shipping fee charged below the threshold.
pub const FLAT_SHIPPING_FEE: Won = Won::new(4_900);

// =============================================================================
// Selection
// =============================================================================

/// Which lines a summary totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Only lines with `is_selected` ("선택상품 주문하기").
    Selected,
    /// Every line ("전체상품 주문하기").
    All,
}

impl Selection {
    #[inline]
    pub fn includes(&self, item: &LineItem) -> bool {
        match self {
            Selection::Selected => item.is_selected,
            Selection::All => true,
        }
    }
}

// =============================================================================
// Shipping Policy
// =============================================================================

/// Threshold-based shipping fee rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPolicy {
    pub free_threshold: Won,
    pub flat_fee: Won,
}

impl ShippingPolicy {
    pub const fn new(free_threshold: Won, flat_fee: Won) -> Self {
        ShippingPolicy {
            free_threshold,
            flat_fee,
        }
    }

    /// Shipping fee for a given subtotal.
    ///
    /// ```rust
    /// use storefront_core::{ShippingPolicy, Won};
    ///
    /// let policy = ShippingPolicy::default();
    /// assert_eq!(policy.fee_for(Won::new(33_000)), Won::zero());
    /// assert_eq!(policy.fee_for(Won::new(32_999)), Won::new(4_900));
    /// ```
    #[inline]
    pub fn fee_for(&self, subtotal: Won) -> Won {
        if subtotal >= self.free_threshold {
            Won::zero()
        } else {
            self.flat_fee
        }
    }

    /// How much more must be added to reach free shipping.
    pub fn remaining_for_free_shipping(&self, subtotal: Won) -> Won {
        if subtotal >= self.free_threshold {
            Won::zero()
        } else {
            self.free_threshold - subtotal
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy::new(FREE_SHIPPING_THRESHOLD, FLAT_SHIPPING_FEE)
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Display figures for a set of line items. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Σ `unit_price × quantity`
    pub subtotal: Won,
    /// Σ `(original_unit_price ?? unit_price) × quantity`
    pub original_subtotal: Won,
    /// `original_subtotal − subtotal`
    pub discount: Won,
    pub shipping_fee: Won,
    /// `subtotal + shipping_fee`
    pub final_amount: Won,
    /// Σ `reward_points`, one per line.
    pub total_reward_points: i64,
    /// Number of lines that were totalled.
    pub selected_count: usize,
}

/// Computes the summary with the default 33,000 / 4,900 shipping rule.
///
/// ## Example
/// ```rust
/// use storefront_core::summary::{compute_summary, Selection};
/// use storefront_core::types::LineItem;
/// use storefront_core::Won;
///
/// let items = vec![LineItem::builder("1", 28_100)
///     .original_unit_price(33_000)
///     .build()
///     .unwrap()];
///
/// let s = compute_summary(&items, Selection::Selected);
/// assert_eq!(s.subtotal, Won::new(28_100));
/// assert_eq!(s.original_subtotal, Won::new(33_000));
/// assert_eq!(s.final_amount, Won::new(33_000));
/// ```
pub fn compute_summary(items: &[LineItem], selection: Selection) -> OrderSummary {
    compute_summary_with(items, selection, &ShippingPolicy::default())
}

/// Computes the summary under an explicit shipping policy.
pub fn compute_summary_with(
    items: &[LineItem],
    selection: Selection,
    policy: &ShippingPolicy,
) -> OrderSummary {
    let mut summary = OrderSummary::default();

    for item in items.iter().filter(|i| selection.includes(i)) {
        summary.subtotal += item.line_total();
        summary.original_subtotal += item.original_line_total();
        summary.total_reward_points =
            summary.total_reward_points.saturating_add(item.reward_points);
        summary.selected_count += 1;
    }

    summary.discount = summary.original_subtotal - summary.subtotal;
    summary.shipping_fee = policy.fee_for(summary.subtotal);
    summary.final_amount = summary.subtotal + summary.shipping_fee;
    summary
}

// =============================================================================
// Unit Tests
// =============================================================================
