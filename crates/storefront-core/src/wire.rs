//! Loosely-typed wire shapes.
//!
//! Numbers may arrive as JSON numbers or as text (`"28,100원"`). Every
//! `LineItem` that is deserialized goes through [`RawLineItem`], so the
//! builder's rules apply to JSON input too.

use serde::Deserialize;

use crate::types::LineItem;
use crate::validation::{parse_amount, ValidationResult};
use crate::ValidationError;

/// A number that may arrive as JSON number or as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawAmount {
    Number(i64),
    Text(String),
}

impl RawAmount {
    pub(crate) fn resolve(self, field: &str) -> ValidationResult<i64> {
        match self {
            RawAmount::Number(n) => Ok(n),
            RawAmount::Text(s) => parse_amount(field, &s),
        }
    }
}

pub(crate) fn resolve_opt(raw: Option<RawAmount>, field: &str) -> ValidationResult<Option<i64>> {
    raw.map(|r| r.resolve(field)).transpose()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawLineItem {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    seller: String,
    #[serde(default)]
    option: Option<String>,
    unit_price: RawAmount,
    #[serde(default)]
    original_unit_price: Option<RawAmount>,
    quantity: RawAmount,
    #[serde(default)]
    reward_points: Option<RawAmount>,
    #[serde(default)]
    is_selected: Option<bool>,
}

impl RawLineItem {
    pub(crate) fn into_line_item(self) -> ValidationResult<LineItem> {
        let unit_price = self.unit_price.resolve("unit_price")?;
        // A zero list price means "no list price".
        let original = resolve_opt(self.original_unit_price, "original_unit_price")?
            .filter(|o| *o != 0);
        let quantity = self.quantity.resolve("quantity")?;
        let reward_points = resolve_opt(self.reward_points, "reward_points")?.unwrap_or(0);

        let mut draft = LineItem::builder(self.id, unit_price)
            .title(self.title)
            .seller(self.seller)
            .maybe_original_unit_price(original)
            .quantity(quantity)
            .reward_points(reward_points)
            .selected(self.is_selected.unwrap_or(true));
        if let Some(option) = self.option {
            draft = draft.option(option);
        }
        draft.build()
    }
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = ValidationError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        raw.into_line_item()
    }
}
