//! # cart-api
//!
//! HTTP API layer for storefront-cart.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for the product catalog and a single cart session
//! - Checkout with the "continue shopping" signal in the response
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/products` | List products |
//! | GET | `/api/v1/products/{name}` | Get product |
//! | GET | `/api/v1/cart` | Cart view |
//! | DELETE | `/api/v1/cart` | Clear cart |
//! | POST | `/api/v1/cart/items` | Add product |
//! | PUT | `/api/v1/cart/items/{name}` | Set quantity |
//! | DELETE | `/api/v1/cart/items/{name}` | Remove item |
//! | POST | `/api/v1/cart/items/{name}/increment` | Quantity + 1 |
//! | POST | `/api/v1/cart/items/{name}/decrement` | Quantity - 1, removes at 1 |
//! | POST | `/api/v1/cart/actions` | Apply a `CartAction` |
//! | POST | `/api/v1/cart/checkout` | Check out |
//! | POST | `/api/v1/cart/continue` | Continue shopping |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
