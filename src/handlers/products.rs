use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::errors::ServiceError;
use crate::handlers::common::{success_response, PaginatedResponse};
use crate::services::ProductListRequest;
use crate::AppState;

/// Creates the router for product endpoints
pub fn products_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

pub fn categories_routes() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    pub category: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// List products with filtering, sorting, and pagination
async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Result<impl axum::response::IntoResponse, ServiceError> {
    if let (Some(min), Some(max)) = (params.min_price, params.max_price) {
        if min > max {
            return Err(ServiceError::InvalidInput(
                "min_price must not exceed max_price".to_string(),
            ));
        }
    }

    let page = state.services.catalog.list(ProductListRequest {
        category: params.category,
        min_price: params.min_price,
        max_price: params.max_price,
        sort: params.sort,
        page: params.page,
        per_page: params.per_page,
    });

    Ok(success_response(PaginatedResponse::new(
        page.items, page.page, page.per_page, page.total,
    )))
}

/// Get a single product by id
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, ServiceError> {
    let product = state.services.catalog.get(id)?;
    Ok(success_response(product))
}

/// List distinct product categories
async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, ServiceError> {
    Ok(success_response(state.services.catalog.categories()))
}
