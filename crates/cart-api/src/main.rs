//! # Storefront Cart
//!
//! Shopping cart service for a web storefront.
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings
//! export PORT=8080
//! export CATALOG_PATH=config/products.toml
//!
//! # Run the server
//! storefront-cart
//! ```

use cart_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Products loaded: {}", state.catalog.len());

    let app = routes::create_router(state);

    info!("🪴 Storefront cart starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("🛒 Cart: GET http://{}/api/v1/cart", addr);
        info!("💳 Checkout: POST http://{}/api/v1/cart/checkout", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🪴 Storefront Cart 🪴
  ━━━━━━━━━━━━━━━━━━━━━
  In-memory shopping cart
  Version: {}
  
"#,
        env!("CARGO_PKG_VERSION")
    );
}
