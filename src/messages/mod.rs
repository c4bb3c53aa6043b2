use std::sync::Arc;
use tokio::sync::{oneshot, watch};
use crate::gateway::PushEvent;

/// Generic type aliases for service communication
pub type ServiceResponse<T> = oneshot::Sender<T>;

/// Identifies one push-channel connection for its whole lifetime.
pub type ConnectionId = u64;

/// Latest-value slot of a single subscriber. `None` until a snapshot is published.
pub type EventReceiver = watch::Receiver<Option<Arc<PushEvent>>>;

/// A registered push-channel subscriber: its id and its private event slot.
#[derive(Debug)]
pub struct Subscription {
    pub id: ConnectionId,
    pub events: EventReceiver,
}

/// Typed messages for the broadcast gateway.
#[derive(Debug)]
pub enum GatewayRequest {
    /// Register a new subscriber and publish the current product collection to it.
    Connect {
        respond_to: ServiceResponse<Subscription>,
    },
    /// Remove a subscriber from the fan-out set.
    Disconnect {
        id: ConnectionId,
    },
    /// The product collection changed; re-publish it to every subscriber.
    ProductsChanged,
    #[cfg(test)]
    SubscriberCount {
        respond_to: ServiceResponse<usize>,
    },
}
