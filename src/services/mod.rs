pub mod cart_service;
pub mod catalog_service;
pub mod checkout_service;

pub use cart_service::CartService;
pub use catalog_service::{CatalogService, ProductListRequest};
pub use checkout_service::{CheckoutService, CheckoutSummary};
