//! # Commands
//!
//! Functions the web views call. Every command takes the state it needs
//! explicitly, logs at `debug`, and returns either a response for the view
//! or an [`ApiError`](crate::error::ApiError).
//!
//! ## Command Categories
//! | Module     | Commands                                                    |
//! |------------|-------------------------------------------------------------|
//! | `cart`     | get, add, update quantity, toggle, select all, remove, clear|
//! | `wishlist` | get, toggle, select all, remove, move selection to cart     |
//! | `checkout` | order selected, order all, receive hand-off, place order    |

pub mod cart;
pub mod checkout;
pub mod wishlist;
