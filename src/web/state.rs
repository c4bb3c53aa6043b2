use tracing::error;

use crate::app_system::StoreSystem;
use crate::clients::{CartClient, ProductClient};
use crate::gateway::BroadcastClient;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub carts: CartClient,
    pub gateway: BroadcastClient,
    pub broadcast_rest_mutations: bool,
}

impl AppState {
    pub fn new(system: &StoreSystem, broadcast_rest_mutations: bool) -> Self {
        Self {
            products: system.product_client.clone(),
            carts: system.cart_client.clone(),
            gateway: system.gateway_client.clone(),
            broadcast_rest_mutations,
        }
    }

    /// Lets push subscribers know about a product change made over HTTP, when enabled.
    pub async fn products_changed(&self) {
        if !self.broadcast_rest_mutations {
            return;
        }
        if let Err(e) = self.gateway.products_changed().await {
            error!(error = %e, "Failed to notify gateway");
        }
    }
}
