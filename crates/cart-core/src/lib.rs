//! # cart-core
//!
//! Core types for the storefront-cart shopping cart.
//!
//! This crate provides:
//! - `CartStore` holding `CartState` and its transitions (add, remove, set quantity, clear)
//! - `CartAction` for applying transitions as data
//! - `Money` and `parse_currency` for cost strings and totals
//! - `checkout` with the `ShoppingNavigator` "continue shopping" signal
//! - `CartView` for rendering
//! - `Product` and `ProductCatalog` for the storefront catalog
//! - `CartError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use cart_core::{checkout, CartStore, CheckoutOutcome, Product, RecordingNavigator};
//!
//! let mut store = CartStore::new();
//! store.add_item(&Product::new("Snake Plant", "snake.jpg", "$15.00"));
//! store.add_item(&Product::new("Snake Plant", "snake.jpg", "$15.00"));
//! assert_eq!(store.cart_total().to_string(), "30.00");
//!
//! let mut navigator = RecordingNavigator::new();
//! let outcome = checkout(&mut store, &mut navigator);
//! assert!(matches!(outcome, CheckoutOutcome::Completed(_)));
//! assert!(store.is_empty());
//! ```

pub mod checkout;
pub mod error;
pub mod item;
pub mod money;
pub mod product;
pub mod store;
pub mod view;

// Re-exports for convenience
pub use checkout::{
    checkout, continue_shopping, CheckoutOutcome, CheckoutReceipt, RecordingNavigator,
    ShoppingNavigator, EMPTY_CART_NOTICE,
};
pub use error::{CartError, CartResult};
pub use item::{quantity_from_number, LineItem};
pub use money::{parse_currency, Money};
pub use product::{Product, ProductCatalog};
pub use store::{CartAction, CartState, CartStore};
pub use view::{CartLineView, CartView};
