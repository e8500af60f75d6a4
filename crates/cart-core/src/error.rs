//! # Cart Error Types
//!
//! Typed error handling for storefront-cart.
//! Cart transitions themselves never fail; errors come from the edges
//! (catalog loading, request handling, checkout on an empty cart).

use thiserror::Error;

/// Core error type for cart operations
#[derive(Debug, Error)]
pub enum CartError {
    /// Configuration errors (unreadable catalog, bad settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Product not found in catalog
    #[error("Product not found: {name}")]
    ProductNotFound { name: String },

    /// Checkout attempted with nothing in the cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CartError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CartError::Configuration(_) => 500,
            CartError::ProductNotFound { .. } => 404,
            CartError::EmptyCart => 409,
            CartError::Serialization(_) => 500,
        }
    }
}

impl From<toml::de::Error> for CartError {
    fn from(err: toml::de::Error) -> Self {
        CartError::Serialization(err.to_string())
    }
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;
