//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the product catalog and the single in-memory cart session.

use anyhow::Context;
use cart_core::{CartStore, ProductCatalog};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Explicit catalog file, overrides the default search paths
    pub catalog_path: Option<String>,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            catalog_path: std::env::var("CATALOG_PATH").ok(),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The cart session; the lock serialises transitions
    pub cart: Arc<Mutex<CartStore>>,
    /// Product catalog
    pub catalog: Arc<ProductCatalog>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState from the environment, loading the catalog
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let catalog = load_product_catalog(config.catalog_path.as_deref())?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create state around an existing catalog with an empty cart
    pub fn with_catalog(config: AppConfig, catalog: ProductCatalog) -> Self {
        Self {
            cart: Arc::new(Mutex::new(CartStore::new())),
            catalog: Arc::new(catalog),
            config,
        }
    }
}

/// Load product catalog from config file
fn load_product_catalog(explicit: Option<&str>) -> anyhow::Result<ProductCatalog> {
    if let Some(path) = explicit {
        return read_catalog(path);
    }

    let config_paths = [
        "config/products.toml",
        "../config/products.toml",
        "../../config/products.toml",
    ];

    for path in config_paths {
        if std::path::Path::new(path).exists() {
            return read_catalog(path);
        }
    }

    tracing::warn!("No product catalog found, using empty catalog");
    Ok(ProductCatalog::new())
}

fn read_catalog(path: &str) -> anyhow::Result<ProductCatalog> {
    let catalog = ProductCatalog::from_file(path)
        .with_context(|| format!("Failed to load catalog {}", path))?;
    if catalog.is_empty() {
        tracing::warn!("Catalog {} has no products", path);
    } else {
        tracing::info!("Loaded {} products from {}", catalog.len(), path);
    }
    Ok(catalog)
}
