//! # cart-wasm
//!
//! WebAssembly bindings for storefront-cart.
//!
//! This crate lets a browser storefront own its cart directly:
//! - `WasmCart` with add/remove/update/clear and the +/- buttons
//! - Cart view and totals for rendering
//! - Checkout with a "continue shopping" callback
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCart } from 'storefront-cart-wasm';
//!
//! await init();
//!
//! const cart = new WasmCart();
//! cart.add_item({ name: 'Snake Plant', image: '/images/snake-plant.jpg', cost: '$15' });
//! cart.increment('Snake Plant');
//!
//! console.log('Total:', cart.cart_total()); // "30.00"
//!
//! const outcome = cart.checkout(() => showProductList());
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use cart_core::{
    checkout, quantity_from_number, CartStore, CartView, Money, Product, ShoppingNavigator,
};
use wasm_bindgen::prelude::*;

/// Calls an optional JS function as the "continue shopping" signal
struct JsNavigator(Option<js_sys::Function>);

impl ShoppingNavigator for JsNavigator {
    fn continue_shopping(&mut self) {
        if let Some(callback) = &self.0 {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                let label = JsValue::from_str("continue shopping callback failed");
                web_sys::console::error_2(&label, &err);
            }
        }
    }
}

/// Shopping cart owned by the page
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct WasmCart {
    store: CartStore,
}

#[wasm_bindgen]
impl WasmCart {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            store: CartStore::new(),
        }
    }

    /// Add one unit of a product object `{ name, image, cost }`
    pub fn add_item(&mut self, product: JsValue) -> Result<(), JsValue> {
        let product: Product = serde_wasm_bindgen::from_value(product)
            .map_err(|e| JsValue::from_str(&format!("Invalid product: {}", e)))?;
        self.store.add_item(&product);
        Ok(())
    }

    /// Add one unit of a product given field by field
    pub fn add_product(&mut self, name: String, image: String, cost: String) {
        self.store.add_item(&Product::new(name, image, cost));
    }

    pub fn remove_item(&mut self, name: &str) {
        self.store.remove_item(name);
    }

    /// Set a quantity from a JS number; non-finite values count as 1,
    /// zero or less removes the item
    pub fn update_quantity(&mut self, name: &str, quantity: f64) {
        self.store.update_quantity(name, quantity_from_number(quantity));
    }

    pub fn increment(&mut self, name: &str) {
        self.store.increment(name);
    }

    pub fn decrement(&mut self, name: &str) {
        self.store.decrement(name);
    }

    pub fn clear_cart(&mut self) {
        self.store.clear_cart();
    }

    /// Current line items as an array of plain objects
    pub fn items(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.store.items())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize items: {}", e)))
    }

    /// Display-ready cart view
    pub fn view(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&CartView::from(self.store.state()))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize view: {}", e)))
    }

    /// Cart total with two decimals, e.g. "25.50"
    pub fn cart_total(&self) -> String {
        self.store.cart_total().to_string()
    }

    /// Line total for one item, "0.00" if absent
    pub fn line_total(&self, name: &str) -> String {
        self.store
            .get(name)
            .map(|item| item.line_total())
            .unwrap_or(Money::ZERO)
            .to_string()
    }

    /// Number of units in the cart
    pub fn item_count(&self) -> f64 {
        self.store.item_count() as f64
    }

    pub fn quantity_of(&self, name: &str) -> u32 {
        self.store.get(name).map(|item| item.quantity).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Check out. `on_continue` is called after the cart is cleared.
    /// Returns `{ status: "completed", ... }` or `{ status: "cart_empty" }`.
    pub fn checkout(&mut self, on_continue: Option<js_sys::Function>) -> Result<JsValue, JsValue> {
        let mut navigator = JsNavigator(on_continue);
        let outcome = checkout(&mut self.store, &mut navigator);
        log(&outcome.notice());
        serde_wasm_bindgen::to_value(&outcome)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize outcome: {}", e)))
    }
}

/// Parse a currency string the way the cart does ("$15.00" -> 15)
#[wasm_bindgen]
pub fn parse_currency(cost: &str) -> f64 {
    cart_core::parse_currency(cost)
}

/// Format a price in cents to display string
#[wasm_bindgen]
pub fn format_price(cents: i64) -> String {
    Money::from_cents(cents).display()
}

/// Log to browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> WasmCart {
        let mut cart = WasmCart::new();
        cart.add_product("A".into(), "a.jpg".into(), "$10".into());
        cart.add_product("A".into(), "a.jpg".into(), "$10".into());
        cart.add_product("B".into(), "b.jpg".into(), "$5.50".into());
        cart
    }

    #[test]
    fn test_cart_total() {
        let cart = cart();
        assert_eq!(cart.cart_total(), "25.50");
        assert_eq!(cart.line_total("A"), "20.00");
        assert_eq!(cart.line_total("missing"), "0.00");
        assert_eq!(cart.item_count(), 3.0);
        assert_eq!(cart.length(), 2);
    }

    #[test]
    fn test_update_quantity_from_js_numbers() {
        let mut cart = cart();

        cart.update_quantity("A", f64::NAN);
        assert_eq!(cart.quantity_of("A"), 1);

        cart.update_quantity("A", 4.7);
        assert_eq!(cart.quantity_of("A"), 4);

        cart.update_quantity("B", 0.0);
        assert_eq!(cart.quantity_of("B"), 0);
        assert_eq!(cart.length(), 1);
    }

    #[test]
    fn test_buttons() {
        let mut cart = cart();

        cart.increment("B");
        assert_eq!(cart.quantity_of("B"), 2);

        cart.decrement("B");
        cart.decrement("B");
        assert_eq!(cart.length(), 1);

        cart.remove_item("A");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1999), "$19.99");
        assert_eq!(format_price(100), "$1.00");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$15.00"), 15.0);
        assert_eq!(parse_currency("$abc"), 0.0);
    }
}
