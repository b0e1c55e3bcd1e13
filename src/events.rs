use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Events emitted by the storefront services.
///
/// Consumers are observational only: no business logic hangs off the event
/// stream, so a dropped event never affects cart or quote correctness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Cart events
    CartItemAdded { product_id: i64, quantity: u32 },
    CartItemRemoved { product_id: i64 },
    CartQuantityUpdated { product_id: i64, quantity: u32 },
    CartCleared,

    // Checkout events
    CouponApplied { code: String },
    CheckoutQuoted { subtotal: i64, total: i64 },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }

    /// Sends an event, logging a warning instead of failing when the
    /// consumer has gone away.
    pub async fn send_or_log(&self, event: Event) {
        if let Err(e) = self.send(event).await {
            warn!("Event delivery failed: {}", e);
        }
    }
}

/// Builds a connected sender/receiver pair with the standard channel depth.
pub fn channel() -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(1024);
    (EventSender::new(tx), rx)
}

/// Drains the event channel, logging each event. Runs until every sender
/// is dropped.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        match &event {
            Event::CartItemAdded {
                product_id,
                quantity,
            } => info!(product_id, quantity, "cart item added"),
            Event::CartItemRemoved { product_id } => info!(product_id, "cart item removed"),
            Event::CartQuantityUpdated {
                product_id,
                quantity,
            } => info!(product_id, quantity, "cart quantity updated"),
            Event::CartCleared => info!("cart cleared"),
            Event::CouponApplied { code } => info!(code = %code, "coupon applied"),
            Event::CheckoutQuoted { subtotal, total } => {
                info!(subtotal, total, "checkout quoted")
            }
        }
    }
    info!("event channel closed; processor exiting");
}
