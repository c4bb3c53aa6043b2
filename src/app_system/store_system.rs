use tracing::{error, info};
use uuid::Uuid;

use crate::actor_framework::{Entity, ResourceActor};
use crate::clients::{CartClient, ProductClient};
use crate::domain::{Cart, Product};
use crate::error::StoreError;
use crate::gateway::{BroadcastClient, BroadcastService};
use crate::record_store::RecordStore;

/// The application system that owns every actor.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct StoreSystem {
    pub product_client: ProductClient,
    pub cart_client: CartClient,
    pub gateway_client: BroadcastClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    pub async fn start(store: RecordStore, buffer_size: usize) -> Result<Self, StoreError> {
        info!("Starting store system");
        store.ensure_collection(Product::COLLECTION).await?;
        store.ensure_collection(Cart::COLLECTION).await?;

        // 1. Product collection
        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(buffer_size, store.clone(), next_uuid);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Cart collection
        let (cart_actor, cart_resource_client) = ResourceActor::<Cart>::new(buffer_size, store, next_uuid);
        let cart_client = CartClient::new(cart_resource_client);
        let cart_handle = tokio::spawn(cart_actor.run());

        // 3. Broadcast gateway, reading snapshots through the product actor
        let (gateway, gateway_client) = BroadcastService::new(buffer_size, product_client.clone());
        let gateway_handle = tokio::spawn(gateway.run());

        Ok(Self {
            product_client,
            cart_client,
            gateway_client,
            handles: vec![gateway_handle, product_handle, cart_handle],
        })
    }

    /// Drops this system's clients and waits for the actors to drain.
    ///
    /// Actors stop once every clone of their client is gone, so callers must
    /// release their own clones first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.gateway_client);
        drop(self.product_client);
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

fn next_uuid() -> String {
    Uuid::new_v4().to_string()
}
