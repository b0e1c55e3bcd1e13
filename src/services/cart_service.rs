use std::sync::Arc;

use tracing::{info, instrument};

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::CartLineItem;

/// Shopping cart service: resolves catalog products into cart lines and
/// applies the four cart mutations.
///
/// The underlying store keeps every operation total (unknown ids no-op,
/// quantities clamp to >= 1); this layer adds catalog resolution, event
/// publication, and the explicit not-found outcome for the HTTP boundary.
#[derive(Clone)]
pub struct CartService {
    store: Arc<CartStore>,
    catalog: Arc<Catalog>,
    events: EventSender,
}

impl CartService {
    pub fn new(store: Arc<CartStore>, catalog: Arc<Catalog>, events: EventSender) -> Self {
        Self {
            store,
            catalog,
            events,
        }
    }

    /// Adds a product to the cart by id, snapshotting its display fields.
    ///
    /// An existing line for the same product is incremented rather than
    /// duplicated. Unknown product ids fail with NotFound; nothing is ever
    /// fabricated into the cart.
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        product_id: i64,
        quantity: u32,
    ) -> Result<Vec<CartLineItem>, ServiceError> {
        let snapshot = self.catalog.snapshot(product_id)?;
        self.store.add(snapshot, quantity).await;

        self.events
            .send_or_log(Event::CartItemAdded {
                product_id,
                quantity,
            })
            .await;

        info!(product_id, quantity, "added item to cart");
        Ok(self.store.items().await)
    }

    /// Removes a line by product id. Idempotent: removing an absent id
    /// leaves the cart unchanged.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, product_id: i64) -> Vec<CartLineItem> {
        self.store.remove(product_id).await;
        self.events
            .send_or_log(Event::CartItemRemoved { product_id })
            .await;
        self.store.items().await
    }

    /// Sets a line's quantity, clamped to at least 1. The store treats an
    /// unknown id as a no-op; here it surfaces as NotFound so the API can
    /// answer 404.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        product_id: i64,
        quantity: i64,
    ) -> Result<Vec<CartLineItem>, ServiceError> {
        if !self.store.update_quantity(product_id, quantity).await {
            return Err(ServiceError::NotFound(format!(
                "Cart line for product {} not found",
                product_id
            )));
        }

        let clamped = crate::cart::clamp_quantity(quantity);
        self.events
            .send_or_log(Event::CartQuantityUpdated {
                product_id,
                quantity: clamped,
            })
            .await;

        Ok(self.store.items().await)
    }

    /// Empties the cart unconditionally.
    #[instrument(skip(self))]
    pub async fn clear(&self) {
        self.store.clear().await;
        self.events.send_or_log(Event::CartCleared).await;
        info!("cleared cart");
    }

    /// Read-only snapshot of the current line items.
    pub async fn items(&self) -> Vec<CartLineItem> {
        self.store.items().await
    }
}
