use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info, instrument};

use super::events::PushEvent;
use crate::clients::ProductClient;
use crate::error::StoreError;
use crate::messages::{ConnectionId, GatewayRequest, ServiceResponse, Subscription};

// =============================================================================
// BROADCAST SERVICE
// =============================================================================

/// Owns the set of connected push subscribers.
///
/// Snapshots are always read from the product actor inside this loop, so a
/// subscriber never receives a catch-up snapshot that is older than a change
/// notification it already got.
///
/// Each subscriber holds a single slot. Publishing overwrites whatever the
/// subscriber has not read yet, so a slow reader skips intermediate snapshots
/// but always ends on the newest one.
pub struct BroadcastService {
    receiver: mpsc::Receiver<GatewayRequest>,
    products: ProductClient,
    subscribers: HashMap<ConnectionId, watch::Sender<Option<Arc<PushEvent>>>>,
    next_connection_id: ConnectionId,
}

impl BroadcastService {
    pub fn new(buffer_size: usize, products: ProductClient) -> (Self, BroadcastClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            products,
            subscribers: HashMap::new(),
            next_connection_id: 1,
        };
        (service, BroadcastClient { sender })
    }

    #[instrument(name = "broadcast_service", skip(self))]
    pub async fn run(mut self) {
        info!("BroadcastService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                GatewayRequest::Connect { respond_to } => {
                    self.handle_connect(respond_to).await;
                }
                GatewayRequest::Disconnect { id } => {
                    self.handle_disconnect(id);
                }
                GatewayRequest::ProductsChanged => {
                    self.handle_products_changed().await;
                }
                #[cfg(test)]
                GatewayRequest::SubscriberCount { respond_to } => {
                    let _ = respond_to.send(self.subscribers.len());
                }
            }
        }
        info!("BroadcastService stopped");
    }

    #[instrument(skip(self, respond_to), fields(connection_id = self.next_connection_id))]
    async fn handle_connect(&mut self, respond_to: ServiceResponse<Subscription>) {
        let id = self.next_connection_id;
        self.next_connection_id += 1;

        let (sender, events) = watch::channel(None);
        match self.products.list_products(None).await {
            Ok(products) => {
                sender.send_replace(Some(Arc::new(PushEvent::Products(products))));
            }
            Err(e) => error!(error = %e, "Failed to load products for catch-up"),
        }

        if respond_to.send(Subscription { id, events }).is_err() {
            debug!("Connection went away before registration");
            return;
        }
        self.subscribers.insert(id, sender);
        info!(subscribers = self.subscribers.len(), "Subscriber connected");
    }

    #[instrument(skip(self))]
    fn handle_disconnect(&mut self, id: ConnectionId) {
        if self.subscribers.remove(&id).is_some() {
            info!(subscribers = self.subscribers.len(), "Subscriber disconnected");
        }
    }

    #[instrument(skip(self), fields(subscribers = self.subscribers.len()))]
    async fn handle_products_changed(&mut self) {
        let products = match self.products.list_products(None).await {
            Ok(products) => products,
            Err(e) => {
                error!(error = %e, "Failed to load products for broadcast");
                return;
            }
        };

        let event = Arc::new(PushEvent::Products(products));
        self.subscribers.retain(|id, sender| {
            if sender.send(Some(Arc::clone(&event))).is_ok() {
                true
            } else {
                debug!(connection_id = id, "Subscriber gone, removing");
                false
            }
        });
        debug!("Products broadcast");
    }
}

// =============================================================================
// BROADCAST CLIENT
// =============================================================================

#[derive(Clone)]
pub struct BroadcastClient {
    sender: mpsc::Sender<GatewayRequest>,
}

impl BroadcastClient {
    /// Registers a subscriber. Its slot already holds the current product collection.
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<Subscription, StoreError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(GatewayRequest::Connect { respond_to })
            .await
            .map_err(|_| StoreError::ActorCommunication("Gateway closed".to_string()))?;
        response
            .await
            .map_err(|_| StoreError::ActorCommunication("Gateway dropped".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn disconnect(&self, id: ConnectionId) {
        debug!("Sending request");
        if self.sender.send(GatewayRequest::Disconnect { id }).await.is_err() {
            debug!("Gateway already stopped");
        }
    }

    /// Asks the gateway to re-publish the product collection to every subscriber.
    #[instrument(skip(self))]
    pub async fn products_changed(&self) -> Result<(), StoreError> {
        debug!("Sending request");
        self.sender
            .send(GatewayRequest::ProductsChanged)
            .await
            .map_err(|_| StoreError::ActorCommunication("Gateway closed".to_string()))
    }

    #[cfg(test)]
    pub async fn subscriber_count(&self) -> Result<usize, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(GatewayRequest::SubscriberCount { respond_to })
            .await
            .map_err(|_| StoreError::ActorCommunication("Gateway closed".to_string()))?;
        response
            .await
            .map_err(|_| StoreError::ActorCommunication("Gateway dropped".to_string()))
    }
}
