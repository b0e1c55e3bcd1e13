use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::handlers::common::success_response;
use crate::models::CartLineItem;
use crate::services::CheckoutSummary;
use crate::AppState;

/// Creates the router for checkout endpoints
pub fn checkout_routes() -> Router<AppState> {
    Router::new().route("/quote", post(quote))
}

#[derive(Debug, Deserialize, Default)]
pub struct QuoteRequest {
    /// Any non-blank code applies the discount (placeholder coupon policy)
    pub coupon_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub items: Vec<CartLineItem>,
    pub summary: CheckoutSummary,
}

/// Quote the current cart: subtotal, shipping, discount, and total
async fn quote(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> Result<impl axum::response::IntoResponse, ServiceError> {
    let items = state.services.cart.items().await;
    let summary = state
        .services
        .checkout
        .quote(&items, payload.coupon_code.as_deref())
        .await;

    Ok(success_response(QuoteResponse { items, summary }))
}
