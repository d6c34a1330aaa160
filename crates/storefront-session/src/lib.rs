//! # Storefront Session Library
//!
//! Owns the state a single browsing session holds (cart, wishlist,
//! configuration) and exposes the commands the web views invoke.
//!
//! ## Module Organization
//! ```text
//! storefront_session/
//! ├── lib.rs          ◄─── You are here (tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── wishlist.rs ◄─── Wishlist state management
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── wishlist.rs ◄─── Wishlist commands
//! │   └── checkout.rs ◄─── Order selected / all, stub order placement
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## No Global State
//! Each session constructs its own `CartState` / `WishlistState` and passes
//! them into commands explicitly. The commands call the pure functions in
//! `storefront-core` on every mutation and return freshly computed totals.

pub mod commands;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=storefront_session=trace` - Trace this crate only
/// - Default: INFO, DEBUG for storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_session=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
