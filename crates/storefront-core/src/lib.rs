//! # storefront-core: Pure Order Math for the Storefront
//!
//! This crate holds the only part of the storefront with real business
//! semantics: order totals and the free-shipping threshold, plus the list
//! operations the cart and wishlist perform on their line items.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Web Views                                  │   │
//! │  │     Cart Page ──► Checkout Page ──► Order Pages   Wishlist      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  storefront-session                             │   │
//! │  │     CartState, WishlistState, ConfigState, commands             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  money   │ │ summary  │ │   cart   │ │ checkout │          │   │
//! │  │   │   Won    │ │  totals  │ │ list ops │ │ hand-off │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Won`, integer KRW amounts
//! - [`types`] - `LineItem`, `WishlistItem`, the `Selectable` trait
//! - [`summary`] - Order Total Calculator and shipping policy
//! - [`cart`] - quantity, selection and removal operations over item lists
//! - [`checkout`] - payload the cart hands to checkout
//! - [`validation`] - boundary validation and coercion
//! - [`error`] - domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::summary::{compute_summary, Selection};
//! use storefront_core::types::LineItem;
//! use storefront_core::Won;
//!
//! let items = vec![LineItem::builder("1", 28_100)
//!     .original_unit_price(33_000)
//!     .reward_points(300)
//!     .build()
//!     .unwrap()];
//!
//! let summary = compute_summary(&items, Selection::Selected);
//! assert_eq!(summary.discount, Won::new(4_900));
//! assert_eq!(summary.shipping_fee, Won::new(4_900)); // 28,100 < 33,000
//! assert_eq!(summary.final_amount, Won::new(33_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;
mod wire;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Won;
pub use summary::{
    compute_summary, compute_summary_with, OrderSummary, Selection, ShippingPolicy,
    FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD,
};
pub use types::*;

// =============================================================================
// Limits
// =============================================================================

/// Highest quantity a single line may carry.
///
/// Together with [`MAX_UNIT_PRICE`] this keeps every line total well inside
/// `i64`, so totals never overflow for any realistic cart.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest unit or list price accepted, in won (1,000억원).
pub const MAX_UNIT_PRICE: i64 = 100_000_000_000;

/// Highest reward a single line may carry.
pub const MAX_REWARD_POINTS: i64 = 100_000_000;
