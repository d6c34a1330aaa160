//! # Validation Module
//!
//! Boundary validation and coercion for line item input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View (form inputs)                                           │
//! │  ├── min="1" on the quantity box                                       │
//! │  └── Numbers may still arrive as text                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_amount / coerce_quantity_input: text → integer              │
//! │  └── validate_*: field rules before a LineItem exists                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: summary / cart                                               │
//! │  └── Pure arithmetic on values that already satisfy the invariants     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{parse_amount, validate_quantity};
//!
//! assert_eq!(parse_amount("price", "28,100원").unwrap(), 28_100);
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_REWARD_POINTS, MAX_UNIT_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a line item id.
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a won amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed MAX_UNIT_PRICE
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_price;
///
/// assert!(validate_price("unit_price", 28_100).is_ok());
/// assert!(validate_price("unit_price", 0).is_ok());
/// assert!(validate_price("unit_price", -100).is_err());
/// assert!(validate_price("unit_price", i64::MAX).is_err());
/// ```
pub fn validate_price(field: &str, amount: i64) -> ValidationResult<()> {
    if amount < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    if amount > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(())
}

/// Validates a list price against the selling price.
///
/// ## Rules
/// - Non-negative
/// - Not below the selling price, so a line's discount is never negative
pub fn validate_original_price(unit_price: i64, original: i64) -> ValidationResult<()> {
    validate_price("original_unit_price", original)?;

    if original < unit_price {
        return Err(ValidationError::OriginalBelowPrice {
            price: unit_price,
            original,
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a per-line reward.
pub fn validate_reward_points(points: i64) -> ValidationResult<()> {
    if points < 0 {
        return Err(ValidationError::Negative {
            field: "reward_points".to_string(),
        });
    }

    if points > MAX_REWARD_POINTS {
        return Err(ValidationError::OutOfRange {
            field: "reward_points".to_string(),
            min: 0,
            max: MAX_REWARD_POINTS,
        });
    }

    Ok(())
}

// =============================================================================
// Coercion
// =============================================================================

/// Parses an integer amount typed or transmitted as text.
///
/// Accepts surrounding whitespace, `,` thousands separators and a trailing
/// `원`. Anything else (decimals, letters, empty input) is rejected.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("price", " 33000 ").unwrap(), 33_000);
/// assert_eq!(parse_amount("price", "4,900원").unwrap(), 4_900);
/// assert!(parse_amount("price", "12.5").is_err());
/// assert!(parse_amount("price", "").is_err());
/// ```
pub fn parse_amount(field: &str, text: &str) -> ValidationResult<i64> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('원').unwrap_or(trimmed).trim_end();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let digits: String = trimmed.chars().filter(|c| *c != ',').collect();
    digits
        .parse::<i64>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: e.to_string(),
        })
}

/// Coerces the quantity input box's text into a quantity.
///
/// Unparsable or empty input becomes `1`. A parsed value below 1 is returned
/// as is, so [`crate::cart::set_quantity`] can reject it.
///
/// ```rust
/// use storefront_core::validation::coerce_quantity_input;
///
/// assert_eq!(coerce_quantity_input("3"), 3);
/// assert_eq!(coerce_quantity_input("abc"), 1);
/// assert_eq!(coerce_quantity_input("-2"), -2);
/// ```
pub fn coerce_quantity_input(text: &str) -> i64 {
    match parse_amount("quantity", text) {
        Ok(0) | Err(_) => 1,
        Ok(qty) => qty,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("1").is_ok());
        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
    }

    #[test]
    fn test_validate_original_price() {
        assert!(validate_original_price(28_100, 33_000).is_ok());
        assert!(validate_original_price(28_100, 28_100).is_ok());
        assert_eq!(
            validate_original_price(28_100, 20_000),
            Err(ValidationError::OriginalBelowPrice {
                price: 28_100,
                original: 20_000
            })
        );
        assert!(matches!(
            validate_original_price(0, -1),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert_eq!(
            validate_quantity(1_000),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: MAX_ITEM_QUANTITY
            })
        );
    }

    #[test]
    fn test_upper_bounds() {
        assert!(validate_price("unit_price", MAX_UNIT_PRICE).is_ok());
        assert!(matches!(
            validate_price("unit_price", MAX_UNIT_PRICE + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_original_price(0, i64::MAX),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_reward_points(i64::MAX),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("price", "0").unwrap(), 0);
        assert_eq!(parse_amount("price", "1,234,567").unwrap(), 1_234_567);
        assert_eq!(parse_amount("price", "33000원").unwrap(), 33_000);
        assert_eq!(parse_amount("price", "-5").unwrap(), -5);

        assert!(matches!(
            parse_amount("price", "  "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_amount("price", "NaN"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_coerce_quantity_input() {
        assert_eq!(coerce_quantity_input("2"), 2);
        assert_eq!(coerce_quantity_input(""), 1);
        assert_eq!(coerce_quantity_input("0"), 1);
        assert_eq!(coerce_quantity_input("1.5"), 1);
        assert_eq!(coerce_quantity_input("-1"), -1);
    }
}
