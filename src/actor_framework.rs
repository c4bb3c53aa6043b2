use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

use crate::error::StoreError;
use crate::record_store::RecordStore;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any persisted record must implement to be managed by ResourceActor
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Debug;
    type Patch: Send + Debug;

    type Action: Send + Debug;
    type ActionResult: Send + Debug;

    /// File stem of the collection holding this entity
    const COLLECTION: &'static str;
    /// Human readable name used in `NotFound` errors
    const KIND: &'static str;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Self;

    // --- Lifecycle Hooks ---

    fn on_update(&mut self, patch: Self::Patch);

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Self::ActionResult;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    List {
        limit: Option<usize>,
        respond_to: Response<Vec<T>>,
    },
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Single writer for one collection.
///
/// Every request runs a full load → compute → save cycle against the
/// [`RecordStore`]. Requests are taken off the queue one at a time, so two
/// mutations of the same collection never interleave.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: RecordStore,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        store: RecordStore,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(collection = T::COLLECTION))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { limit, respond_to } => {
                    let _ = respond_to.send(self.handle_list(limit).await);
                }
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(id).await);
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch).await);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id).await);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action).await);
                }
            }
        }
        info!("ResourceActor stopped");
    }

    async fn load(&self) -> Result<Vec<T>, StoreError> {
        self.store.load(T::COLLECTION).await.inspect_err(|e| {
            error!(error = %e, "Failed to load collection");
        })
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        self.store.save(T::COLLECTION, records).await.inspect_err(|e| {
            error!(error = %e, "Failed to save collection");
        })
    }

    fn not_found(id: &T::Id) -> StoreError {
        debug!(%id, "Record not found");
        StoreError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }

    #[instrument(skip(self))]
    async fn handle_list(&self, limit: Option<usize>) -> Result<Vec<T>, StoreError> {
        let mut records = self.load().await?;
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        debug!(count = records.len(), "Listing records");
        Ok(records)
    }

    #[instrument(skip(self, payload))]
    async fn handle_create(&self, payload: T::CreatePayload) -> Result<T, StoreError> {
        let mut records = self.load().await?;

        let mut id = (self.next_id_fn)();
        while records.iter().any(|r| r.id() == &id) {
            debug!(%id, "Generated id already taken, drawing another");
            id = (self.next_id_fn)();
        }

        let item = T::from_create(id, payload);
        records.push(item.clone());
        self.save(&records).await?;

        info!(id = %item.id(), "Record created");
        Ok(item)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn handle_get(&self, id: T::Id) -> Result<T, StoreError> {
        let records = self.load().await?;
        records
            .into_iter()
            .find(|r| r.id() == &id)
            .ok_or_else(|| Self::not_found(&id))
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    async fn handle_update(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError> {
        let mut records = self.load().await?;
        let item = records
            .iter_mut()
            .find(|r| r.id() == &id)
            .ok_or_else(|| Self::not_found(&id))?;

        item.on_update(patch);
        let updated = item.clone();
        self.save(&records).await?;

        info!("Record updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn handle_delete(&self, id: T::Id) -> Result<T, StoreError> {
        let mut records = self.load().await?;
        let index = records
            .iter()
            .position(|r| r.id() == &id)
            .ok_or_else(|| Self::not_found(&id))?;

        let removed = records.remove(index);
        self.save(&records).await?;

        info!("Record deleted");
        Ok(removed)
    }

    #[instrument(skip(self, action), fields(id = %id))]
    async fn handle_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, StoreError> {
        let mut records = self.load().await?;
        let item = records
            .iter_mut()
            .find(|r| r.id() == &id)
            .ok_or_else(|| Self::not_found(&id))?;

        debug!(?action, "Applying action");
        let result = item.handle_action(action);
        self.save(&records).await?;
        Ok(result)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorCommunication("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| StoreError::ActorCommunication("Actor dropped".to_string()))?
    }

    pub async fn list(&self, limit: Option<usize>) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| ResourceRequest::List { limit, respond_to }).await
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, StoreError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, StoreError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<T, StoreError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
