//! # State Module
//!
//! Session state for the storefront views.
//!
//! ## Why Multiple State Types?
//! Each command declares exactly the state it touches: cart commands take
//! `CartState`, wishlist commands take `WishlistState`, and anything that
//! prices an order also takes `ConfigState` for the shipping policy.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │WishlistState │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │    Cart      │  │   Wishlist   │  │  shipping policy │              │
//! │  │  >>          │  │  >>          │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  • CartState / WishlistState: exclusive access per command             │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod wishlist;

pub use cart::{Cart, CartState};
pub use config::ConfigState;
pub use wishlist::{Wishlist, WishlistState};
