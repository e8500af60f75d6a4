//! # Cart Store
//!
//! Holds the ordered list of line items and applies the cart transitions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         CartStore                           │
//! │                                                             │
//! │  add_item(product)      ──► quantity += 1 or push new item  │
//! │  remove_item(name)      ──► drop item (no-op if absent)     │
//! │  update_quantity(n, q)  ──► set q, remove when q <= 0       │
//! │  clear_cart()           ──► items = []                      │
//! │                                                             │
//! │  increment / decrement  ──► UI actions built on the above   │
//! │  dispatch(CartAction)   ──► any one of the above            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invariants: names are unique and every stored quantity is at least 1.

use crate::item::LineItem;
use crate::money::Money;
use crate::product::Product;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The items currently in the cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CartSnapshot")]
pub struct CartState {
    items: Vec<LineItem>,
}

/// Unvalidated wire form of [`CartState`]
#[derive(Deserialize)]
struct CartSnapshot {
    #[serde(default)]
    items: Vec<LineItem>,
}

impl From<CartSnapshot> for CartState {
    fn from(snapshot: CartSnapshot) -> Self {
        CartState::from_items(snapshot.items)
    }
}

impl CartState {
    /// Empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a state from an arbitrary list.
    ///
    /// Items sharing a name are merged into the first occurrence with their
    /// quantities summed; zero quantities are dropped.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut merged: Vec<LineItem> = Vec::new();
        for item in items {
            match merged.iter_mut().find(|i| i.name == item.name) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity)
                }
                None => merged.push(item),
            }
        }
        merged.retain(|i| i.quantity > 0);
        Self { items: merged }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all items
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of line totals
    pub fn cart_total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

/// A single cart transition, in serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    /// Add one unit of a product
    AddItem { product: Product },
    /// Remove a line item by name
    RemoveItem { name: String },
    /// Set the quantity of a line item
    UpdateQuantity { name: String, quantity: i64 },
    /// Empty the cart
    ClearCart,
    /// Add one unit of an item already in the cart
    Increment { name: String },
    /// Take one unit away, removing the item at quantity 1
    Decrement { name: String },
}

/// Owner of a [`CartState`]; the only way to mutate it
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Create a store with an empty cart
    pub fn new() -> Self {
        Self {
            state: CartState::new(),
        }
    }

    /// Read the current state
    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.state.get(name)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    pub fn cart_total(&self) -> Money {
        self.state.cart_total()
    }

    /// Add one unit of `product`, appending a new line item if needed
    pub fn add_item(&mut self, product: &Product) {
        match self.find_mut(&product.name) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                debug!(name = %product.name, quantity = item.quantity, "Incremented cart item");
            }
            None => {
                self.state.items.push(LineItem::from_product(product));
                debug!(name = %product.name, "Added cart item");
            }
        }
    }

    /// Remove the item called `name`, if present
    pub fn remove_item(&mut self, name: &str) {
        let before = self.state.items.len();
        self.state.items.retain(|i| i.name != name);
        if self.state.items.len() != before {
            debug!(name, "Removed cart item");
        }
    }

    /// Set the quantity of the item called `name`.
    ///
    /// A quantity of zero or less removes the item. Quantities beyond
    /// `u32::MAX` saturate. Unknown names are ignored.
    pub fn update_quantity(&mut self, name: &str, quantity: i64) {
        if quantity <= 0 {
            if self.get(name).is_some() {
                debug!(name, quantity, "Non-positive quantity, removing item");
                self.remove_item(name);
            }
            return;
        }

        if let Some(item) = self.find_mut(name) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            debug!(name, quantity = item.quantity, "Updated cart item quantity");
        }
    }

    /// Empty the cart
    pub fn clear_cart(&mut self) {
        debug!(items = self.state.items.len(), "Clearing cart");
        self.state.items.clear();
    }

    /// Add one unit to an existing item
    pub fn increment(&mut self, name: &str) {
        if let Some(quantity) = self.get(name).map(|i| i.quantity) {
            self.update_quantity(name, i64::from(quantity) + 1);
        }
    }

    /// Take one unit away; an item at quantity 1 is removed
    pub fn decrement(&mut self, name: &str) {
        match self.get(name).map(|i| i.quantity) {
            Some(quantity) if quantity > 1 => self.update_quantity(name, i64::from(quantity) - 1),
            Some(_) => self.remove_item(name),
            None => {}
        }
    }

    /// Apply one transition
    pub fn dispatch(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem { product } => self.add_item(&product),
            CartAction::RemoveItem { name } => self.remove_item(&name),
            CartAction::UpdateQuantity { name, quantity } => self.update_quantity(&name, quantity),
            CartAction::ClearCart => self.clear_cart(),
            CartAction::Increment { name } => self.increment(&name),
            CartAction::Decrement { name } => self.decrement(&name),
        }
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut LineItem> {
        self.state.items.iter_mut().find(|i| i.name == name)
    }
}
