//! Storefront API Library
//!
//! Product catalog browsing, a session-scoped shopping cart, and checkout
//! quotes over a static bundled catalog. There is no persistence: the cart
//! lives for the process lifetime and the catalog is read-only after load.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod middleware_helpers;
pub mod models;
pub mod services;
pub mod tracing;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::services::{CartService, CatalogService, CheckoutService};

/// Services used by the HTTP handlers.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: CatalogService,
    pub cart: CartService,
    pub checkout: CheckoutService,
}

impl AppServices {
    pub fn new(
        config: &config::AppConfig,
        catalog: Arc<Catalog>,
        cart_store: Arc<CartStore>,
        event_sender: events::EventSender,
    ) -> Self {
        Self {
            catalog: CatalogService::new(catalog.clone(), config.listing.clone()),
            cart: CartService::new(cart_store, catalog, event_sender.clone()),
            checkout: CheckoutService::new(config.pricing.clone(), event_sender),
        }
    }
}

/// Shared application state.
///
/// The cart store is owned here and reaches views only through this state;
/// there is no ambient global. The catalog is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub catalog: Arc<Catalog>,
    pub cart_store: Arc<CartStore>,
    pub services: AppServices,
}

impl AppState {
    pub fn new(
        config: config::AppConfig,
        catalog: Catalog,
        event_sender: events::EventSender,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let cart_store = Arc::new(CartStore::new());
        let services = AppServices::new(
            &config,
            catalog.clone(),
            cart_store.clone(),
            event_sender.clone(),
        );
        Self {
            config,
            event_sender,
            catalog,
            cart_store,
            services,
        }
    }
}

/// The versioned API surface.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", handlers::products::products_routes())
        .nest("/categories", handlers::products::categories_routes())
        .nest("/cart", handlers::carts::carts_routes())
        .nest("/checkout", handlers::checkout::checkout_routes())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Builds the application router: health, versioned API, and the request-id
/// middleware every request passes through. Transport-level layers (trace,
/// compression, CORS) are applied by the binary.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "storefront-api up" }))
        .route("/health", get(health))
        .nest("/api/v1", api_v1_routes())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
