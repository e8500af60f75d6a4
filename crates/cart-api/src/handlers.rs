//! # Request Handlers
//!
//! Axum request handlers for the cart API.
//! Every cart handler takes the cart lock for the whole transition and
//! answers with the resulting cart view.

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cart_core::{
    checkout, CartAction, CartError, CartStore, CartView, CheckoutReceipt, Product,
    RecordingNavigator,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Add item request
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    /// Catalog product name
    pub name: String,
}

/// Product list filter
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

/// Update quantity request
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// Checkout response
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub receipt: CheckoutReceipt,
    pub message: String,
    /// The storefront should leave the cart view
    pub continue_shopping: bool,
}

/// Continue shopping response
#[derive(Debug, Serialize)]
pub struct ContinueShoppingResponse {
    pub continue_shopping: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn cart_error_to_response(err: CartError) -> ApiError {
    let code = err.status_code();
    let mut response = ErrorResponse::new(err.to_string(), code);
    if matches!(err, CartError::EmptyCart) {
        response = response.with_details(cart_core::EMPTY_CART_NOTICE);
    }
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

fn view_of(store: &CartStore) -> Json<CartView> {
    Json(CartView::from(store.state()))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "storefront-cart",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Get products list, optionally narrowed to one category
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> impl IntoResponse {
    let products: Vec<&Product> = match query.category.as_deref() {
        Some(category) => state.catalog.in_category(category).collect(),
        None => state.catalog.products.iter().collect(),
    };

    Json(serde_json::json!({
        "count": products.len(),
        "products": products,
        "categories": state.catalog.categories(),
    }))
}

/// Get single product
pub async fn get_product(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .catalog
        .get(&name)
        .ok_or_else(|| cart_error_to_response(CartError::ProductNotFound { name: name.clone() }))?;

    Ok(Json(product.clone()))
}

/// Current cart contents and totals
pub async fn get_cart(State(state): State<AppState>) -> Json<CartView> {
    let cart = state.cart.lock().await;
    view_of(&cart)
}

/// Add one unit of a catalog product
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn add_item(
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<CartView>, ApiError> {
    let product = state.catalog.get(&request.name).ok_or_else(|| {
        warn!("Add requested for unknown product");
        cart_error_to_response(CartError::ProductNotFound {
            name: request.name.clone(),
        })
    })?;

    let mut cart = state.cart.lock().await;
    cart.add_item(product);
    Ok(view_of(&cart))
}

/// Set an item's quantity
#[instrument(skip(state, request), fields(quantity = request.quantity))]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Json<CartView> {
    let mut cart = state.cart.lock().await;
    cart.update_quantity(&name, request.quantity);
    view_of(&cart)
}

/// Remove an item
pub async fn remove_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<CartView> {
    let mut cart = state.cart.lock().await;
    cart.remove_item(&name);
    view_of(&cart)
}

/// "+" button
pub async fn increment_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<CartView> {
    let mut cart = state.cart.lock().await;
    cart.increment(&name);
    view_of(&cart)
}

/// "-" button
pub async fn decrement_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<CartView> {
    let mut cart = state.cart.lock().await;
    cart.decrement(&name);
    view_of(&cart)
}

/// Empty the cart
pub async fn clear_cart(State(state): State<AppState>) -> Json<CartView> {
    let mut cart = state.cart.lock().await;
    cart.clear_cart();
    view_of(&cart)
}

/// Apply a transition given as data
#[instrument(skip(state))]
pub async fn dispatch_action(
    State(state): State<AppState>,
    Json(action): Json<CartAction>,
) -> Json<CartView> {
    let mut cart = state.cart.lock().await;
    cart.dispatch(action);
    view_of(&cart)
}

/// Check out: total, clear, signal continue shopping
#[instrument(skip(state))]
pub async fn checkout_cart(
    State(state): State<AppState>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let mut navigator = RecordingNavigator::new();
    let outcome = {
        let mut cart = state.cart.lock().await;
        checkout(&mut cart, &mut navigator)
    };

    let message = outcome.notice();
    let receipt = outcome.into_result().map_err(cart_error_to_response)?;

    info!("Checkout receipt {} total={}", receipt.id, receipt.total.display());

    Ok(Json(CheckoutResponse {
        receipt,
        message,
        continue_shopping: navigator.was_signalled(),
    }))
}

/// Leave the cart view
pub async fn continue_shopping() -> Json<ContinueShoppingResponse> {
    let mut navigator = RecordingNavigator::new();
    cart_core::continue_shopping(&mut navigator);
    Json(ContinueShoppingResponse {
        continue_shopping: navigator.was_signalled(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
        assert!(err.details.is_none());
    }

    #[test]
    fn test_cart_error_conversion() {
        let (status, json) = cart_error_to_response(CartError::ProductNotFound {
            name: "Cactus".into(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.error, "Product not found: Cactus");

        let (status, json) = cart_error_to_response(CartError::EmptyCart);
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.details.as_deref(), Some(cart_core::EMPTY_CART_NOTICE));
    }
}
