//! # Checkout Hand-off
//!
//! The payload the cart page sends to the checkout page when the shopper
//! presses "선택상품 주문하기" (order selected) or "전체상품 주문하기"
//! (order all).
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart page                                   Checkout page              │
//! │  ─────────                                   ─────────────              │
//! │  CheckoutRequest::from_items(items, sel)                                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  to_json() ──────────── JSON ──────────────► from_json()                │
//! │                                                   │                     │
//! │                                                   ├─ coerce each line   │
//! │                                                   │  (numbers or text)  │
//! │                                                   ├─ validate           │
//! │                                                   └─ RECOMPUTE summary  │
//! │                                                                         │
//! │  Totals sent along are kept only as `claimed` and compared, never used. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Won;
use crate::summary::{compute_summary_with, OrderSummary, Selection, ShippingPolicy};
use crate::types::LineItem;
use crate::validation::ValidationResult;
use crate::wire::{resolve_opt, RawAmount, RawLineItem};

// =============================================================================
// Checkout Request
// =============================================================================

/// Lines chosen for checkout plus their computed summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub items: Vec<LineItem>,
    pub summary: OrderSummary,
}

impl CheckoutRequest {
    /// Builds the hand-off for the chosen lines under the default policy.
    ///
    /// ## Errors
    /// `CoreError::EmptyCheckout` if the selection picks nothing.
    pub fn from_items(items: &[LineItem], selection: Selection) -> CoreResult<Self> {
        Self::from_items_with(items, selection, &ShippingPolicy::default())
    }

    pub fn from_items_with(
        items: &[LineItem],
        selection: Selection,
        policy: &ShippingPolicy,
    ) -> CoreResult<Self> {
        let chosen: Vec<LineItem> = items
            .iter()
            .filter(|i| selection.includes(i))
            .cloned()
            .collect();

        if chosen.is_empty() {
            return Err(CoreError::EmptyCheckout);
        }

        // Lines are all "in" once they reach checkout.
        let items: Vec<LineItem> = chosen
            .into_iter()
            .map(|mut i| {
                i.is_selected = true;
                i
            })
            .collect();
        let summary = compute_summary_with(&items, Selection::All, policy);
        Ok(CheckoutRequest { items, summary })
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a hand-off under the default policy. See [`Self::from_json_with`].
    pub fn from_json(json: &str) -> CoreResult<ReceivedCheckout> {
        Self::from_json_with(json, &ShippingPolicy::default())
    }

    /// Decodes a hand-off, validating every line and recomputing totals.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::checkout::CheckoutRequest;
    /// use storefront_core::Won;
    ///
    /// let json = r#"{"items":[{"id":"1","unitPrice":"28100",
    ///     "originalUnitPrice":33000,"quantity":"1","rewardPoints":300}],
    ///     "summary":{"finalAmount":33000}}"#;
    ///
    /// let received = CheckoutRequest::from_json(json).unwrap();
    /// assert_eq!(received.request.summary.final_amount, Won::new(33_000));
    /// assert!(received.totals_match());
    /// ```
    pub fn from_json_with(json: &str, policy: &ShippingPolicy) -> CoreResult<ReceivedCheckout> {
        let raw: RawCheckoutRequest = serde_json::from_str(json)?;

        let items = raw
            .items
            .into_iter()
            .map(RawLineItem::into_line_item)
            .collect::<ValidationResult<Vec<_>>>()?;

        if items.is_empty() {
            return Err(CoreError::EmptyCheckout);
        }

        let claimed = raw.summary.map(RawTotals::resolve).transpose()?;
        let summary = compute_summary_with(&items, Selection::All, policy);

        Ok(ReceivedCheckout {
            request: CheckoutRequest { items, summary },
            claimed,
        })
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Received Checkout
// =============================================================================

/// A decoded hand-off: the trusted request plus whatever totals the sender
/// claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedCheckout {
    pub request: CheckoutRequest,
    pub claimed: Option<ClaimedTotals>,
}

impl ReceivedCheckout {
    /// Whether every claimed total agrees with the recomputed summary.
    /// No claim at all counts as agreement.
    pub fn totals_match(&self) -> bool {
        match &self.claimed {
            Some(claimed) => claimed.agrees_with(&self.request.summary),
            None => true,
        }
    }
}

/// Totals as sent by the cart; any of them may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClaimedTotals {
    pub subtotal: Option<Won>,
    pub shipping_fee: Option<Won>,
    pub final_amount: Option<Won>,
}

impl ClaimedTotals {
    pub fn agrees_with(&self, summary: &OrderSummary) -> bool {
        self.subtotal.map_or(true, |v| v == summary.subtotal)
            && self.shipping_fee.map_or(true, |v| v == summary.shipping_fee)
            && self.final_amount.map_or(true, |v| v == summary.final_amount)
    }
}

// =============================================================================
// Wire Shapes
// =============================================================================

/// The hand-off as received; lines and totals are checked separately.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCheckoutRequest {
    items: Vec<RawLineItem>,
    #[serde(default)]
    summary: Option<RawTotals>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTotals {
    #[serde(default)]
    subtotal: Option<RawAmount>,
    #[serde(default)]
    shipping_fee: Option<RawAmount>,
    #[serde(default)]
    final_amount: Option<RawAmount>,
}

impl RawTotals {
    fn resolve(self) -> ValidationResult<ClaimedTotals> {
        Ok(ClaimedTotals {
            subtotal: resolve_opt(self.subtotal, "subtotal")?.map(Won::new),
            shipping_fee: resolve_opt(self.shipping_fee, "shipping_fee")?.map(Won::new),
            final_amount: resolve_opt(self.final_amount, "final_amount")?.map(Won::new),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
