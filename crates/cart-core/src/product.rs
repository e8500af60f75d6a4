//! # Product Types
//!
//! Storefront products as the cart receives them.
//! Products are loaded from `config/products.toml`.

use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};

/// A product offered by the storefront
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name; also the cart identity key
    pub name: String,

    /// Image URI
    #[serde(default)]
    pub image: String,

    /// Currency-formatted cost (e.g., "$15.00")
    pub cost: String,

    /// Short description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Catalog category (e.g., "Air Purifying Plants")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// Create a product with the fields the cart needs
    pub fn new(name: impl Into<String>, image: impl Into<String>, cost: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            cost: cost.into(),
            description: String::new(),
            category: None,
        }
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Product catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Builder: add a product
    pub fn with_product(mut self, product: Product) -> Self {
        self.add(product);
        self
    }

    /// Find a product by name
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Products in a category, in catalog order
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |p| p.category.as_deref() == Some(category))
    }

    /// Distinct categories, in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.products.iter().filter_map(|p| p.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> CartResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load catalog from a TOML file
    pub fn from_file(path: &str) -> CartResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CartError::Configuration(format!("cannot read {}: {}", path, e)))?;
        Self::from_toml(&content)
    }
}
