//! # Cart View Model
//!
//! Display-ready data for the cart page. Rendering is left to the
//! storefront; this module only decides what the numbers say.

use crate::item::LineItem;
use crate::money::Money;
use crate::store::CartState;
use serde::Serialize;

/// One rendered cart row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub name: String,
    pub image: String,
    /// Unit cost, e.g. "$15.00"
    pub unit_cost: String,
    pub quantity: u32,
    /// Cost times quantity, e.g. "$30.00"
    pub line_total: String,
}

impl From<&LineItem> for CartLineView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            image: item.image.clone(),
            unit_cost: item.unit_price().display(),
            quantity: item.quantity,
            line_total: item.line_total().display(),
        }
    }
}

/// The whole cart page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub item_count: u64,
    pub total: Money,
    /// Total with currency symbol, e.g. "$25.50"
    pub total_display: String,
}

impl From<&CartState> for CartView {
    fn from(state: &CartState) -> Self {
        let total = state.cart_total();
        Self {
            items: state.items().iter().map(CartLineView::from).collect(),
            item_count: state.item_count(),
            total,
            total_display: total.display(),
        }
    }
}

impl CartView {
    /// Heading shown above the items
    pub fn heading(&self) -> String {
        format!("Total Cart Amount: {}", self.total_display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;
    use crate::store::CartStore;

    #[test]
    fn test_cart_view() {
        let mut store = CartStore::new();
        store.add_item(&Product::new("Snake Plant", "snake.jpg", "$15"));
        store.add_item(&Product::new("Snake Plant", "snake.jpg", "$15"));
        store.add_item(&Product::new("Mystery", "m.jpg", "ask us"));

        let view = CartView::from(store.state());

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].unit_cost, "$15.00");
        assert_eq!(view.items[0].line_total, "$30.00");
        assert_eq!(view.items[1].unit_cost, "$0.00");
        assert_eq!(view.item_count, 3);
        assert_eq!(view.heading(), "Total Cart Amount: $30.00");
    }

    #[test]
    fn test_view_json() {
        let view = CartView::from(&CartState::new());
        let json = serde_json::to_value(&view).unwrap();

        assert!(view.items.is_empty());
        assert_eq!(json["total"], 0);
        assert_eq!(json["total_display"], "$0.00");
    }
}
