//! # Checkout Summary Tool
//!
//! Reads a checkout hand-off JSON file and prints the recomputed totals.
//! Handy for checking what the cart page is sending.
//!
//! ## Usage
//! ```bash
//! cargo run -p storefront-session --bin storefront-summary -- checkout.json
//!
//! # With a different shipping rule
//! STOREFRONT_FREE_SHIPPING_THRESHOLD=50000 \
//!     cargo run -p storefront-session --bin storefront-summary -- checkout.json
//! ```

use std::env;
use std::fs;

use storefront_session::commands::checkout::receive_checkout;
use storefront_session::init_tracing;
use storefront_session::state::ConfigState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let path = match args.get(1).map(String::as_str) {
        Some("-h") | Some("--help") | None => {
            println!("Usage: storefront-summary <CHECKOUT_JSON>");
            println!();
            println!("Environment:");
            println!("  STOREFRONT_FREE_SHIPPING_THRESHOLD   Free shipping from (default 33000)");
            println!("  STOREFRONT_SHIPPING_FEE              Flat fee below it (default 4900)");
            return Ok(());
        }
        Some(path) => path.to_string(),
    };

    let config = ConfigState::from_env();
    let json = fs::read_to_string(&path)?;
    let request = receive_checkout(&json, &config)?;

    println!("{} - {}", config.store_name, path);
    println!("================================");
    for item in &request.items {
        let badge = item
            .discount_rate_percent()
            .map(|p| format!(" ({}% 할인)", p))
            .unwrap_or_default();
        println!(
            "{:<24} x{:<3} {:>12}{}",
            item.title,
            item.quantity,
            item.line_total().to_string(),
            badge
        );
    }

    let s = &request.summary;
    println!("--------------------------------");
    println!("총 상품금액   {:>14}", s.original_subtotal.to_string());
    println!("총 할인금액   {:>14}", format!("-{}", s.discount));
    println!("배송비        {:>14}", s.shipping_fee.to_string());
    println!("총 결제금액   {:>14}", s.final_amount.to_string());
    println!("총 적립예정   {:>14}", format!("{}원", s.total_reward_points));

    let remaining = config
        .shipping_policy()
        .remaining_for_free_shipping(s.subtotal);
    if remaining.is_positive() {
        println!();
        println!("{} more for free shipping", remaining);
    }

    Ok(())
}
