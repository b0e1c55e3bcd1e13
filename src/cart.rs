//! The session cart: a single authoritative in-memory collection of line
//! items, mutated only through the operations below.
//!
//! Every operation is total: unknown ids are no-ops and bad quantities are
//! clamped, never errors. Observers subscribe through a watch channel and
//! receive the full cart contents immediately after each mutation.

use tokio::sync::{watch, RwLock};

use crate::models::{CartLineItem, ProductSnapshot};

/// Clamps a requested quantity into the representable line range:
/// at least 1, at most `u32::MAX`. Casting alone would truncate values
/// above `u32::MAX` down to small quantities.
pub fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(1, i64::from(u32::MAX)) as u32
}

pub struct CartStore {
    items: RwLock<Vec<CartLineItem>>,
    notify: watch::Sender<Vec<CartLineItem>>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        let (notify, _) = watch::channel(Vec::new());
        Self {
            items: RwLock::new(Vec::new()),
            notify,
        }
    }

    /// Adds a product to the cart. If a line with the same product id already
    /// exists its quantity is incremented; otherwise a new line is appended
    /// with the snapshot's display fields. Quantities below 1 clamp to 1.
    ///
    /// There is no upper bound and no stock check.
    pub async fn add(&self, snapshot: ProductSnapshot, quantity: u32) {
        let quantity = quantity.max(1);
        {
            let mut items = self.items.write().await;
            if let Some(line) = items.iter_mut().find(|line| line.id == snapshot.id) {
                line.quantity = line.quantity.saturating_add(quantity);
            } else {
                items.push(CartLineItem::new(snapshot, quantity));
            }
        }
        self.publish().await;
    }

    /// Removes the line with the given product id. No-op when absent, so a
    /// repeated remove is idempotent.
    pub async fn remove(&self, id: i64) {
        {
            let mut items = self.items.write().await;
            items.retain(|line| line.id != id);
        }
        self.publish().await;
    }

    /// Sets the quantity of the line with the given product id to
    /// `max(1, quantity)`, capped at `u32::MAX`. Clamping, never removal: a
    /// zero or negative input leaves the line present with quantity 1. No-op
    /// when the id is absent.
    ///
    /// Returns whether a line was updated.
    pub async fn update_quantity(&self, id: i64, quantity: i64) -> bool {
        let updated = {
            let mut items = self.items.write().await;
            match items.iter_mut().find(|line| line.id == id) {
                Some(line) => {
                    line.quantity = clamp_quantity(quantity);
                    true
                }
                None => false,
            }
        };
        self.publish().await;
        updated
    }

    /// Empties the cart unconditionally.
    pub async fn clear(&self) {
        self.items.write().await.clear();
        self.publish().await;
    }

    /// A read-only snapshot of the current line items.
    pub async fn items(&self) -> Vec<CartLineItem> {
        self.items.read().await.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Subscribes to cart contents. The receiver observes the cart after
    /// every mutation, starting from its current state.
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartLineItem>> {
        self.notify.subscribe()
    }

    async fn publish(&self) {
        let snapshot = self.items.read().await.clone();
        // send_replace keeps the latest state available even with no
        // active subscribers
        self.notify.send_replace(snapshot);
    }
}
