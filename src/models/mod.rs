pub mod cart_item;
pub mod product;

pub use cart_item::CartLineItem;
pub use product::{Product, ProductSnapshot};
