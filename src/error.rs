use thiserror::Error;

/// Errors raised by the record store, the resource actors and their clients.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Storage read error on collection '{collection}': {reason}")]
    StorageRead { collection: String, reason: String },
    #[error("Storage write error on collection '{collection}': {reason}")]
    StorageWrite { collection: String, reason: String },
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl StoreError {
    pub fn read(collection: &str, reason: impl ToString) -> Self {
        Self::StorageRead {
            collection: collection.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write(collection: &str, reason: impl ToString) -> Self {
        Self::StorageWrite {
            collection: collection.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
