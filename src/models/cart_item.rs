use serde::{Deserialize, Serialize};

use super::product::ProductSnapshot;

/// One row in the cart: at most one line per distinct product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product id this line refers to (not an owning reference)
    pub id: i64,
    pub name: String,
    /// Unit price in minor currency units, frozen at add time
    pub price: i64,
    pub image: String,
    /// Always >= 1
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(snapshot: ProductSnapshot, quantity: u32) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name,
            price: snapshot.price,
            image: snapshot.image,
            quantity,
        }
    }

    /// Line total in minor currency units.
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}
