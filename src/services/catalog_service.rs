use std::sync::Arc;

use tracing::instrument;

use crate::catalog::query::{self, ProductQuery, QueryPage, SortKey};
use crate::catalog::Catalog;
use crate::config::ListingConfig;
use crate::errors::ServiceError;
use crate::models::{Product, ProductSnapshot};

/// Read-only listing and lookup over the static catalog.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    listing: ListingConfig,
}

/// Listing parameters as they arrive from the caller, before defaults are
/// applied. Absent price bounds mean unbounded; absent paging means page 1
/// at the configured default size.
#[derive(Debug, Clone, Default)]
pub struct ProductListRequest {
    pub category: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl CatalogService {
    pub fn new(catalog: Arc<Catalog>, listing: ListingConfig) -> Self {
        Self { catalog, listing }
    }

    /// Lists products: category filter, price filter, sort, paginate, in
    /// that order. Page size is capped at the configured maximum.
    #[instrument(skip(self))]
    pub fn list(&self, request: ProductListRequest) -> QueryPage {
        let per_page = request
            .per_page
            .unwrap_or(self.listing.default_page_size)
            .clamp(1, self.listing.max_page_size);

        let query = ProductQuery {
            category: request.category,
            min_price: request.min_price.unwrap_or(0),
            max_price: request.max_price.unwrap_or(i64::MAX),
            sort: request.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
            page: request.page.unwrap_or(1),
            per_page,
        };

        query::run(self.catalog.products(), &query)
    }

    /// Looks up a single product; unknown ids are an explicit NotFound.
    pub fn get(&self, id: i64) -> Result<Product, ServiceError> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", id)))
    }

    /// The add-to-cart snapshot for a product id.
    pub fn snapshot(&self, id: i64) -> Result<ProductSnapshot, ServiceError> {
        self.catalog.snapshot(id)
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }
}
