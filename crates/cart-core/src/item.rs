//! # Line Items
//!
//! One distinct product entry in the cart, identified by name.

use crate::money::{parse_currency, Money};
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A line item in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name (identity key)
    pub name: String,

    /// Image URI
    #[serde(default)]
    pub image: String,

    /// Currency-formatted unit cost, kept as given
    pub cost: String,

    /// Quantity, at least 1 while the item is in a cart
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl LineItem {
    /// Create a line item from a product with quantity 1
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image: product.image.clone(),
            cost: product.cost.clone(),
            quantity: 1,
        }
    }

    /// Numeric unit cost; unparseable costs count as zero
    pub fn unit_cost(&self) -> f64 {
        parse_currency(&self.cost)
    }

    /// Unit cost rounded to cents
    pub fn unit_price(&self) -> Money {
        Money::from_decimal(self.unit_cost())
    }

    /// Unit cost times quantity, rounded to 2 decimal places
    pub fn line_total(&self) -> Money {
        Money::from_decimal(self.unit_cost() * f64::from(self.quantity))
    }
}

/// Convert a loosely-typed quantity (e.g. a JS number) into an integer.
///
/// Non-finite values become 1. Finite values are truncated toward zero and
/// saturate at the bounds of `i64`.
pub fn quantity_from_number(value: f64) -> i64 {
    if value.is_finite() {
        value.trunc() as i64
    } else {
        1
    }
}
