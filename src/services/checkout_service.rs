use serde::Serialize;
use tracing::{info, instrument};

use crate::config::PricingConfig;
use crate::events::{Event, EventSender};
use crate::models::CartLineItem;

/// The checkout summary derived from the cart contents and coupon state.
///
/// All amounts are integer minor currency units; the display boundary owns
/// locale formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub subtotal: i64,
    pub shipping: i64,
    pub discount: i64,
    pub total: i64,
    pub coupon_applied: bool,
}

/// Derives checkout totals from cart state. Pure and deterministic:
/// recomputed in full on every request, no cached or incremental state.
#[derive(Clone)]
pub struct CheckoutService {
    pricing: PricingConfig,
    events: EventSender,
}

impl CheckoutService {
    pub fn new(pricing: PricingConfig, events: EventSender) -> Self {
        Self { pricing, events }
    }

    /// Coupon policy: any non-blank code applies the flat percentage
    /// discount. A placeholder rule, not a coupon registry.
    pub fn coupon_applies(code: Option<&str>) -> bool {
        code.map(|c| !c.trim().is_empty()).unwrap_or(false)
    }

    /// Computes the summary for the given line items.
    ///
    /// An empty cart still quotes the flat shipping fee (the free-shipping
    /// threshold is not met); refusing to check out an empty cart is the
    /// presentation layer's call, not arithmetic here.
    pub fn summarize(&self, items: &[CartLineItem], coupon_applied: bool) -> CheckoutSummary {
        let subtotal: i64 = items.iter().map(CartLineItem::line_total).sum();

        let shipping = if subtotal > self.pricing.free_shipping_threshold {
            0
        } else {
            self.pricing.flat_shipping_fee
        };

        // Integer round-half-up so fractional cents from the percentage
        // never reach the wire
        let discount = if coupon_applied {
            (subtotal * i64::from(self.pricing.coupon_discount_percent) + 50) / 100
        } else {
            0
        };

        CheckoutSummary {
            subtotal,
            shipping,
            discount,
            total: subtotal + shipping - discount,
            coupon_applied,
        }
    }

    /// Quotes the cart, applying the coupon code under the placeholder
    /// policy and publishing checkout events.
    #[instrument(skip(self, items))]
    pub async fn quote(&self, items: &[CartLineItem], coupon_code: Option<&str>) -> CheckoutSummary {
        let coupon_applied = Self::coupon_applies(coupon_code);
        if coupon_applied {
            let code = coupon_code.unwrap_or_default().trim().to_string();
            self.events.send_or_log(Event::CouponApplied { code }).await;
        }

        let summary = self.summarize(items, coupon_applied);
        self.events
            .send_or_log(Event::CheckoutQuoted {
                subtotal: summary.subtotal,
                total: summary.total,
            })
            .await;

        info!(
            subtotal = summary.subtotal,
            shipping = summary.shipping,
            discount = summary.discount,
            total = summary.total,
            "checkout quote computed"
        );
        summary
    }
}
