//! # Routes
//!
//! Axum router configuration for the cart API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - Catalog:
///   - GET  /api/v1/products - List all products (`?category=` filters)
///   - GET  /api/v1/products/{name} - Get product by name
///
/// - Cart:
///   - GET    /api/v1/cart - Cart view
///   - DELETE /api/v1/cart - Clear cart
///   - POST   /api/v1/cart/items - Add a catalog product
///   - PUT    /api/v1/cart/items/{name} - Set quantity
///   - DELETE /api/v1/cart/items/{name} - Remove item
///   - POST   /api/v1/cart/items/{name}/increment
///   - POST   /api/v1/cart/items/{name}/decrement
///   - POST   /api/v1/cart/actions - Apply a `CartAction`
///   - POST   /api/v1/cart/checkout - Check out
///   - POST   /api/v1/cart/continue - Continue shopping
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", api_routes())
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    let catalog_routes = Router::new()
        .route("/products", get(handlers::list_products))
        .route("/products/{name}", get(handlers::get_product));

    let cart_routes = Router::new()
        .route("/cart", get(handlers::get_cart).delete(handlers::clear_cart))
        .route("/cart/items", post(handlers::add_item))
        .route(
            "/cart/items/{name}",
            put(handlers::update_quantity).delete(handlers::remove_item),
        )
        .route("/cart/items/{name}/increment", post(handlers::increment_item))
        .route("/cart/items/{name}/decrement", post(handlers::decrement_item))
        .route("/cart/actions", post(handlers::dispatch_action))
        .route("/cart/checkout", post(handlers::checkout_cart))
        .route("/cart/continue", post(handlers::continue_shopping));

    Router::new().merge(catalog_routes).merge(cart_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use cart_core::{Product, ProductCatalog};
    use serde_json::{json, Value};

    fn test_server() -> TestServer {
        let catalog = ProductCatalog::new()
            .with_product(
                Product::new("Snake Plant", "snake.jpg", "$10").with_category("Air Purifying"),
            )
            .with_product(
                Product::new("Lavender", "lavender.jpg", "$5.50").with_category("Aromatic"),
            )
            .with_product(Product::new("Mystery Seed", "seed.jpg", "$abc"));
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            catalog_path: None,
        };
        TestServer::new(create_router(AppState::with_catalog(config, catalog))).unwrap()
    }

    async fn add(server: &TestServer, name: &str) -> Value {
        server
            .post("/api/v1/cart/items")
            .json(&json!({ "name": name }))
            .await
            .json::<Value>()
    }

    #[tokio::test]
    async fn test_health() {
        let server = test_server();
        let response = server.get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_list_and_get_products() {
        let server = test_server();

        let list = server.get("/api/v1/products").await.json::<Value>();
        assert_eq!(list["count"], 3);

        let product = server.get("/api/v1/products/Lavender").await;
        product.assert_status_ok();
        assert_eq!(product.json::<Value>()["cost"], "$5.50");

        server
            .get("/api/v1/products/Cactus")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_products_by_category() {
        let server = test_server();

        let list = server
            .get("/api/v1/products")
            .add_query_param("category", "Aromatic")
            .await
            .json::<Value>();

        assert_eq!(list["count"], 1);
        assert_eq!(list["products"][0]["name"], "Lavender");
        assert_eq!(list["categories"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_add_items_and_total() {
        let server = test_server();

        add(&server, "Snake Plant").await;
        add(&server, "Snake Plant").await;
        let view = add(&server, "Lavender").await;

        assert_eq!(view["items"].as_array().unwrap().len(), 2);
        assert_eq!(view["items"][0]["quantity"], 2);
        assert_eq!(view["total_display"], "$25.50");
        assert_eq!(view["item_count"], 3);
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let server = test_server();

        server
            .post("/api/v1/cart/items")
            .json(&json!({ "name": "Cactus" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unparseable_cost_totals_zero() {
        let server = test_server();

        let view = add(&server, "Mystery Seed").await;

        assert_eq!(view["items"][0]["line_total"], "$0.00");
        assert_eq!(view["total_display"], "$0.00");
    }

    #[tokio::test]
    async fn test_quantity_controls() {
        let server = test_server();
        add(&server, "Lavender").await;

        let view = server
            .put("/api/v1/cart/items/Lavender")
            .json(&json!({ "quantity": 4 }))
            .await
            .json::<Value>();
        assert_eq!(view["items"][0]["quantity"], 4);

        let view = server
            .post("/api/v1/cart/items/Lavender/increment")
            .await
            .json::<Value>();
        assert_eq!(view["items"][0]["quantity"], 5);

        server
            .put("/api/v1/cart/items/Lavender")
            .json(&json!({ "quantity": 1 }))
            .await
            .assert_status_ok();
        let view = server
            .post("/api/v1/cart/items/Lavender/decrement")
            .await
            .json::<Value>();
        assert!(view["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_to_zero_removes() {
        let server = test_server();
        add(&server, "Lavender").await;

        let view = server
            .put("/api/v1/cart/items/Lavender")
            .json(&json!({ "quantity": 0 }))
            .await
            .json::<Value>();

        assert!(view["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let server = test_server();
        add(&server, "Lavender").await;
        add(&server, "Snake Plant").await;

        let view = server
            .delete("/api/v1/cart/items/Cactus")
            .await
            .json::<Value>();
        assert_eq!(view["items"].as_array().unwrap().len(), 2);

        let view = server
            .delete("/api/v1/cart/items/Lavender")
            .await
            .json::<Value>();
        assert_eq!(view["items"].as_array().unwrap().len(), 1);

        let view = server.delete("/api/v1/cart").await.json::<Value>();
        assert!(view["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_action() {
        let server = test_server();

        let view = server
            .post("/api/v1/cart/actions")
            .json(&json!({
                "type": "add_item",
                "product": { "name": "Fern", "image": "fern.jpg", "cost": "$7" }
            }))
            .await
            .json::<Value>();

        assert_eq!(view["items"][0]["name"], "Fern");
        assert_eq!(view["total_display"], "$7.00");
    }

    #[tokio::test]
    async fn test_checkout_empty_cart() {
        let server = test_server();

        let response = server.post("/api/v1/cart/checkout").await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["error"], "Cart is empty");
    }

    #[tokio::test]
    async fn test_checkout_clears_cart() {
        let server = test_server();
        add(&server, "Snake Plant").await;
        add(&server, "Snake Plant").await;
        add(&server, "Lavender").await;

        let response = server.post("/api/v1/cart/checkout").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["receipt"]["total"], 2550);
        assert_eq!(body["continue_shopping"], true);
        assert_eq!(body["message"], "Checkout completed! Total amount: $25.50");

        let view = server.get("/api/v1/cart").await.json::<Value>();
        assert!(view["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_continue_shopping() {
        let server = test_server();

        let body = server.post("/api/v1/cart/continue").await.json::<Value>();

        assert_eq!(body["continue_shopping"], true);
    }
}
