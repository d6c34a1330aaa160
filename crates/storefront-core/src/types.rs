//! # Domain Types
//!
//! Line items as the cart, checkout and wishlist views hold them.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │     LineItem        │          │    WishlistItem     │              │
//! │  │  ─────────────────  │          │  ─────────────────  │              │
//! │  │  id                 │          │  id                 │              │
//! │  │  unit_price         │          │  unit_price         │              │
//! │  │  original_price?    │◄─────────│  original_price?    │              │
//! │  │  quantity (>= 1)    │ move to  │  added_on           │              │
//! │  │  reward_points      │   cart   │  is_selected        │              │
//! │  │  is_selected        │          │                     │              │
//! │  └─────────────────────┘          └─────────────────────┘              │
//! │            │                                │                           │
//! │            └──────────── Selectable ────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Won;
use crate::validation::{
    validate_item_id, validate_original_price, validate_price, validate_quantity,
    validate_reward_points, ValidationResult,
};

// =============================================================================
// Selectable
// =============================================================================

/// An entry keyed by id that carries a selection checkbox.
///
/// The cart and the wishlist both select, toggle and bulk-remove their
/// entries; the operations in [`crate::cart`] are written against this trait.
pub trait Selectable {
    fn id(&self) -> &str;
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, value: bool);
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in a cart or checkout.
///
/// ## Invariants
/// - `unit_price >= 0`
/// - `original_unit_price >= unit_price` when present
/// - `quantity >= 1`
/// - `reward_points >= 0`, flat per line
///
/// Construct through [`LineItem::builder`], which enforces these.
/// Deserializing goes through the same checks, so JSON cannot produce a line
/// the builder would refuse. Values built field by field should be checked
/// with [`LineItem::validate`] before they reach a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "crate::wire::RawLineItem")]
pub struct LineItem {
    /// Stable per cart entry.
    pub id: String,

    pub title: String,

    /// Seller / shipping carrier label shown under the title.
    pub seller: String,

    /// Delivery option text, e.g. "무료배송 / 개별배송".
    pub option: Option<String>,

    /// Selling price per unit.
    pub unit_price: Won,

    /// List price per unit; `None` means not discounted.
    pub original_unit_price: Option<Won>,

    pub quantity: i64,

    /// Reward accrued for this line, regardless of quantity.
    pub reward_points: i64,

    pub is_selected: bool,
}

impl LineItem {
    /// Starts building a line item with the given id and selling price.
    ///
    /// Defaults: quantity 1, no original price, no reward points, selected.
    pub fn builder(id: impl Into<String>, unit_price: i64) -> LineItemDraft {
        LineItemDraft {
            id: id.into(),
            title: String::new(),
            seller: String::new(),
            option: None,
            unit_price,
            original_unit_price: None,
            quantity: 1,
            reward_points: 0,
            is_selected: true,
        }
    }

    /// Re-checks every invariant on an existing value.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_item_id(&self.id)?;
        validate_price("unit_price", self.unit_price.amount())?;
        if let Some(original) = self.original_unit_price {
            validate_original_price(self.unit_price.amount(), original.amount())?;
        }
        validate_quantity(self.quantity)?;
        validate_reward_points(self.reward_points)
    }

    /// The list price, falling back to the selling price.
    #[inline]
    pub fn effective_original_unit_price(&self) -> Won {
        self.original_unit_price.unwrap_or(self.unit_price)
    }

    /// `unit_price × quantity`
    #[inline]
    pub fn line_total(&self) -> Won {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// `(original_unit_price ?? unit_price) × quantity`
    #[inline]
    pub fn original_line_total(&self) -> Won {
        self.effective_original_unit_price()
            .multiply_quantity(self.quantity)
    }

    /// Discount badge value in whole percent, rounded half up.
    ///
    /// ```rust
    /// use storefront_core::types::LineItem;
    ///
    /// let item = LineItem::builder("1", 28_100)
    ///     .original_unit_price(33_000)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(item.discount_rate_percent(), Some(15));
    /// ```
    pub fn discount_rate_percent(&self) -> Option<u32> {
        let original = self.effective_original_unit_price().amount();
        let price = self.unit_price.amount();
        if original <= 0 || original <= price {
            return None;
        }
        let (original, price) = (original as i128, price as i128);
        let off = original - price;
        Some(((off * 100 + original / 2) / original) as u32)
    }
}

impl Selectable for LineItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_selected(&self) -> bool {
        self.is_selected
    }

    fn set_selected(&mut self, value: bool) {
        self.is_selected = value;
    }
}

/// Unvalidated line item fields, finished by [`LineItemDraft::build`].
#[derive(Debug, Clone)]
pub struct LineItemDraft {
    id: String,
    title: String,
    seller: String,
    option: Option<String>,
    unit_price: i64,
    original_unit_price: Option<i64>,
    quantity: i64,
    reward_points: i64,
    is_selected: bool,
}

impl LineItemDraft {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn seller(mut self, seller: impl Into<String>) -> Self {
        self.seller = seller.into();
        self
    }

    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.option = Some(option.into());
        self
    }

    pub fn original_unit_price(mut self, original: i64) -> Self {
        self.original_unit_price = Some(original);
        self
    }

    /// Sets the list price when one is known.
    pub fn maybe_original_unit_price(mut self, original: Option<i64>) -> Self {
        self.original_unit_price = original;
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn reward_points(mut self, points: i64) -> Self {
        self.reward_points = points;
        self
    }

    pub fn selected(mut self, value: bool) -> Self {
        self.is_selected = value;
        self
    }

    /// Validates every field and produces the line item.
    pub fn build(self) -> ValidationResult<LineItem> {
        let item = LineItem {
            id: self.id.trim().to_string(),
            title: self.title,
            seller: self.seller,
            option: self.option,
            unit_price: Won::new(self.unit_price),
            original_unit_price: self.original_unit_price.map(Won::new),
            quantity: self.quantity,
            reward_points: self.reward_points,
            is_selected: self.is_selected,
        };
        item.validate()?;
        Ok(item)
    }
}

// =============================================================================
// Wishlist Item
// =============================================================================

/// A saved product on the wishlist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub title: String,
    pub seller: String,
    pub unit_price: Won,
    pub original_unit_price: Option<Won>,
    pub is_selected: bool,
    #[ts(as = "String")]
    pub added_on: NaiveDate,
}

impl WishlistItem {
    /// Converts to a quantity-1, selected cart line.
    ///
    /// Wishlist entries carry no reward points, so the cart line starts at 0.
    pub fn to_line_item(&self) -> ValidationResult<LineItem> {
        LineItem::builder(self.id.clone(), self.unit_price.amount())
            .title(self.title.clone())
            .seller(self.seller.clone())
            .maybe_original_unit_price(self.original_unit_price.map(|w| w.amount()))
            .build()
    }
}

impl Selectable for WishlistItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_selected(&self) -> bool {
        self.is_selected
    }

    fn set_selected(&mut self, value: bool) {
        self.is_selected = value;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_builder_defaults() {
        let item = LineItem::builder("1", 28_100).build().unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.reward_points, 0);
        assert!(item.is_selected);
        assert_eq!(item.original_unit_price, None);
        assert_eq!(item.effective_original_unit_price(), Won::new(28_100));
    }

    #[test]
    fn test_builder_rejects_invalid_fields() {
        assert!(matches!(
            LineItem::builder("", 1_000).build(),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            LineItem::builder("1", -1).build(),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            LineItem::builder("1", 1_000).quantity(0).build(),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            LineItem::builder("1", 1_000).original_unit_price(900).build(),
            Err(ValidationError::OriginalBelowPrice { .. })
        ));
        assert!(matches!(
            LineItem::builder("1", 1_000).reward_points(-5).build(),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_builder_rejects_out_of_range() {
        assert!(matches!(
            LineItem::builder("1", i64::MAX).build(),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            LineItem::builder("1", 0).original_unit_price(i64::MAX / 10).build(),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            LineItem::builder("1", 1_000).quantity(1_000).build(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_catches_hand_built_values() {
        let mut item = LineItem::builder("1", 5_000).build().unwrap();
        assert!(item.validate().is_ok());

        item.original_unit_price = Some(Won::new(1_000));
        assert!(matches!(
            item.validate(),
            Err(ValidationError::OriginalBelowPrice { .. })
        ));

        item.original_unit_price = None;
        item.quantity = 0;
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_deserialize_rejects_invalid_lines() {
        let below = r#"{"id":"1","unitPrice":5000,"originalUnitPrice":1000,"quantity":1}"#;
        assert!(serde_json::from_str::<LineItem>(below).is_err());

        let zero_qty = r#"{"id":"1","unitPrice":5000,"quantity":0,"rewardPoints":-10}"#;
        assert!(serde_json::from_str::<LineItem>(zero_qty).is_err());

        let huge = r#"{"id":"1","unitPrice":9223372036854775807,"quantity":2}"#;
        assert!(serde_json::from_str::<LineItem>(huge).is_err());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let item = LineItem::builder("1", 28_100)
            .original_unit_price(33_000)
            .option("무료배송")
            .reward_points(300)
            .selected(false)
            .build()
            .unwrap();
        let json = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_discount_rate_on_large_prices() {
        let item = LineItem::builder("1", 0)
            .original_unit_price(crate::MAX_UNIT_PRICE)
            .build()
            .unwrap();
        assert_eq!(item.discount_rate_percent(), Some(100));

        // Hand-built past the limits; still no overflow.
        let mut wild = item.clone();
        wild.original_unit_price = Some(Won::new(i64::MAX));
        assert_eq!(wild.discount_rate_percent(), Some(100));
    }

    #[test]
    fn test_line_totals() {
        let item = LineItem::builder("1", 28_100)
            .original_unit_price(33_000)
            .quantity(2)
            .build()
            .unwrap();
        assert_eq!(item.line_total(), Won::new(56_200));
        assert_eq!(item.original_line_total(), Won::new(66_000));
    }

    #[test]
    fn test_discount_rate() {
        let plain = LineItem::builder("1", 10_000).build().unwrap();
        assert_eq!(plain.discount_rate_percent(), None);

        let half = LineItem::builder("2", 5_000)
            .original_unit_price(10_000)
            .build()
            .unwrap();
        assert_eq!(half.discount_rate_percent(), Some(50));

        let free = LineItem::builder("3", 0)
            .original_unit_price(10_000)
            .build()
            .unwrap();
        assert_eq!(free.discount_rate_percent(), Some(100));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let item = LineItem::builder("1", 28_100)
            .original_unit_price(33_000)
            .reward_points(300)
            .build()
            .unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["unitPrice"], 28_100);
        assert_eq!(json["originalUnitPrice"], 33_000);
        assert_eq!(json["rewardPoints"], 300);
        assert_eq!(json["isSelected"], true);
    }

    #[test]
    fn test_wishlist_item_to_line_item() {
        let wish = WishlistItem {
            id: "1".to_string(),
            title: "WONT 치즈 크롭 가디건".to_string(),
            seller: "우체국택배".to_string(),
            unit_price: Won::new(28_100),
            original_unit_price: Some(Won::new(33_000)),
            is_selected: true,
            added_on: NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
        };

        let line = wish.to_line_item().unwrap();
        assert_eq!(line.id, "1");
        assert_eq!(line.quantity, 1);
        assert_eq!(line.reward_points, 0);
        assert_eq!(line.original_unit_price, Some(Won::new(33_000)));
        assert!(line.is_selected);
    }
}
