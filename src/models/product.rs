use serde::{Deserialize, Serialize};

/// A catalog product. Immutable after the catalog is loaded; every list the
/// API returns is a read-only projection of these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Stored as authored; comparisons normalize to lowercase
    pub category: String,
    /// Price in minor currency units (cents)
    pub price: i64,
    /// 0.0 to 5.0
    pub rating: f64,
    /// Recorded availability flag; cart operations deliberately do not
    /// consult it
    pub stock: bool,
    pub description: String,
    pub image: String,
}

impl Product {
    /// The display fields copied into a cart line at add time.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}

/// Display fields captured when a product enters the cart. Later catalog
/// price changes never reprice lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub image: String,
}
