use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::errors::ServiceError;
use crate::models::{Product, ProductSnapshot};

pub mod query;

/// On-disk shape of the catalog fixture.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// The static, read-only product catalog.
///
/// Loaded once at startup and shared immutably; every query the API serves
/// is a projection over this set. There is no schema evolution to support
/// and no mutation path.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<i64, usize>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id, idx))
            .collect();
        Self { products, by_id }
    }

    /// Parses a catalog from its JSON fixture text.
    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| ServiceError::InternalError(format!("invalid catalog fixture: {}", e)))?;
        Ok(Self::new(file.products))
    }

    /// Loads the catalog fixture from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ServiceError::InternalError(format!(
                "failed to read catalog fixture {}: {}",
                path.display(),
                e
            ))
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            products = catalog.len(),
            path = %path.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.by_id.get(&id).map(|&idx| &self.products[idx])
    }

    /// Resolves a product id to its add-to-cart snapshot. An unknown id is an
    /// explicit not-found outcome, never a fabricated placeholder.
    pub fn snapshot(&self, id: i64) -> Result<ProductSnapshot, ServiceError> {
        self.get(id)
            .map(Product::snapshot)
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", id)))
    }

    /// Distinct categories in first-seen order, as authored in the fixture.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen
                .iter()
                .any(|c: &String| c.eq_ignore_ascii_case(&product.category))
            {
                seen.push(product.category.clone());
            }
        }
        seen
    }
}
