use axum::{
    extract::{Json, Path, State},
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ServiceError;
use crate::handlers::common::{no_content_response, success_response, validate_input};
use crate::models::CartLineItem;
use crate::services::CheckoutSummary;
use crate::AppState;

/// Creates the router for cart endpoints
pub fn carts_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart))
        .route("/items", post(add_to_cart))
        .route("/items/:id", put(update_cart_item))
        .route("/items/:id", delete(remove_cart_item))
        .route("/clear", post(clear_cart))
}

/// The cart as the client renders it: line items plus a coupon-free summary.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineItem>,
    pub summary: CheckoutSummary,
}

impl CartView {
    fn build(state: &AppState, items: Vec<CartLineItem>) -> Self {
        let summary = state.services.checkout.summarize(&items, false);
        Self { items, summary }
    }
}

/// Get the current cart contents
async fn get_cart(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, ServiceError> {
    let items = state.services.cart.items().await;
    Ok(success_response(CartView::build(&state, items)))
}

/// Add a product to the cart
async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddItemRequest>,
) -> Result<impl axum::response::IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let quantity = payload.quantity.unwrap_or(1);
    let items = state
        .services
        .cart
        .add_item(payload.product_id, quantity)
        .await?;

    Ok(success_response(CartView::build(&state, items)))
}

/// Update a cart line's quantity (values below 1 clamp to 1)
async fn update_cart_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> Result<impl axum::response::IntoResponse, ServiceError> {
    let items = state
        .services
        .cart
        .update_quantity(id, payload.quantity)
        .await?;

    Ok(success_response(CartView::build(&state, items)))
}

/// Remove a line from the cart; removing an absent line is a no-op
async fn remove_cart_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, ServiceError> {
    state.services.cart.remove_item(id).await;
    Ok(no_content_response())
}

/// Clear all items from the cart
async fn clear_cart(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, ServiceError> {
    state.services.cart.clear().await;
    Ok(no_content_response())
}

// Request DTOs

#[derive(Debug, Deserialize, Validate)]
pub struct AddItemRequest {
    pub product_id: i64,
    /// Defaults to 1 when omitted
    #[validate(range(min = 1))]
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}
