pub mod carts;
pub mod checkout;
pub mod common;
pub mod products;
