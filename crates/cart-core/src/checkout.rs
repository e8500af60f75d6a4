//! # Checkout Flow
//!
//! Checkout computes the cart total, clears the cart and hands control back
//! to the storefront through the "continue shopping" signal. No payment
//! provider is involved.
//!
//! ```text
//!   checkout(store, navigator)
//!        │
//!        ├── cart empty ──► CheckoutOutcome::CartEmpty   (nothing changes)
//!        │
//!        └── cart has items
//!              ├── receipt = total + snapshot of lines
//!              ├── store.clear_cart()
//!              ├── navigator.continue_shopping()
//!              └──► CheckoutOutcome::Completed(receipt)
//! ```

use crate::error::CartError;
use crate::item::LineItem;
use crate::money::Money;
use crate::store::CartStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// Notice shown when checkout is attempted with an empty cart
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty. Please add items before checking out.";

/// Receiver of the zero-argument "continue shopping" signal.
///
/// The storefront implements this to leave the cart view and return to the
/// product listing.
pub trait ShoppingNavigator {
    fn continue_shopping(&mut self);
}

impl<F: FnMut()> ShoppingNavigator for F {
    fn continue_shopping(&mut self) {
        self()
    }
}

/// Navigator that remembers whether it was signalled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    signalled: bool,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_signalled(&self) -> bool {
        self.signalled
    }
}

impl ShoppingNavigator for RecordingNavigator {
    fn continue_shopping(&mut self) {
        self.signalled = true;
    }
}

/// Summary of a completed checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    /// Receipt identifier
    pub id: String,

    /// Cart total at checkout
    pub total: Money,

    /// Total units purchased
    pub item_count: u64,

    /// Lines as they were at checkout
    pub items: Vec<LineItem>,

    /// When checkout completed
    pub completed_at: DateTime<Utc>,
}

impl CheckoutReceipt {
    /// "Checkout completed! Total amount: $25.50"
    pub fn message(&self) -> String {
        format!("Checkout completed! Total amount: {}", self.total.display())
    }
}

/// Result of a checkout attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// Total computed, cart cleared, navigator signalled
    Completed(CheckoutReceipt),
    /// Nothing to check out; cart untouched
    CartEmpty,
}

impl CheckoutOutcome {
    /// Message for the shopper
    pub fn notice(&self) -> String {
        match self {
            CheckoutOutcome::Completed(receipt) => receipt.message(),
            CheckoutOutcome::CartEmpty => EMPTY_CART_NOTICE.to_string(),
        }
    }

    /// The receipt, or [`CartError::EmptyCart`]
    pub fn into_result(self) -> Result<CheckoutReceipt, CartError> {
        match self {
            CheckoutOutcome::Completed(receipt) => Ok(receipt),
            CheckoutOutcome::CartEmpty => Err(CartError::EmptyCart),
        }
    }
}

/// Check out the cart held by `store`
pub fn checkout<N>(store: &mut CartStore, navigator: &mut N) -> CheckoutOutcome
where
    N: ShoppingNavigator + ?Sized,
{
    if store.is_empty() {
        warn!("Checkout attempted with an empty cart");
        return CheckoutOutcome::CartEmpty;
    }

    let receipt = CheckoutReceipt {
        id: Uuid::new_v4().to_string(),
        total: store.cart_total(),
        item_count: store.item_count(),
        items: store.items().to_vec(),
        completed_at: Utc::now(),
    };

    info!(
        receipt_id = %receipt.id,
        items = receipt.item_count,
        total = %receipt.total,
        "Checkout completed"
    );

    store.clear_cart();
    navigator.continue_shopping();

    CheckoutOutcome::Completed(receipt)
}

/// Leave the cart view without checking out
pub fn continue_shopping<N>(navigator: &mut N)
where
    N: ShoppingNavigator + ?Sized,
{
    navigator.continue_shopping();
}
