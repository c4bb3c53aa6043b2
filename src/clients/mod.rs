//! Typed handles over the resource actors.

#[macro_use]
mod macros;

pub mod product_client;
pub mod cart_client;

pub use product_client::ProductClient;
pub use cart_client::CartClient;
