pub mod cart_handlers;
pub mod product_handlers;
