//! HTTP request/response surface.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::configure_app_routes;
pub use state::AppState;
