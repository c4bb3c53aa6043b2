//! Cart-specific domain logic, including the add-product action.

mod actions;
pub mod entity;

pub use actions::*;
