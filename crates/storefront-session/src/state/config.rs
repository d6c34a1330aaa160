//! # Configuration State
//!
//! Stores session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no mutex.

use serde::{Deserialize, Serialize};
use storefront_core::validation::parse_amount;
use storefront_core::{ShippingPolicy, Won, FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD};
use tracing::warn;

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the header and order pages
    pub store_name: String,

    /// Subtotal at or above which shipping is free
    pub free_shipping_threshold: Won,

    /// Fee charged below the threshold
    pub shipping_fee: Won,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Free shipping from 33,000원
    /// - Flat fee 4,900원
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront".to_string(),
            free_shipping_threshold: FREE_SHIPPING_THRESHOLD,
            shipping_fee: FLAT_SHIPPING_FEE,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_FREE_SHIPPING_THRESHOLD`: e.g. "33000" or "33,000"
    /// - `STOREFRONT_SHIPPING_FEE`: e.g. "4900"
    ///
    /// Unparsable or negative amounts are logged and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(amount) = amount_var(&lookup, "STOREFRONT_FREE_SHIPPING_THRESHOLD") {
            config.free_shipping_threshold = amount;
        }

        if let Some(amount) = amount_var(&lookup, "STOREFRONT_SHIPPING_FEE") {
            config.shipping_fee = amount;
        }

        config
    }

    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy::new(self.free_shipping_threshold, self.shipping_fee)
    }
}

fn amount_var<F>(lookup: &F, key: &str) -> Option<Won>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match parse_amount(key, &raw) {
        Ok(amount) if amount >= 0 => Some(Won::new(amount)),
        Ok(amount) => {
            warn!(key, amount, "negative amount in config, keeping default");
            None
        }
        Err(e) => {
            warn!(key, error = %e, "invalid amount in config, keeping default");
            None
        }
    }
}
