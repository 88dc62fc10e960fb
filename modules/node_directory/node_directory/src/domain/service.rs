use std::sync::Arc;

use node_directory_sdk::NodeRecord;

use super::error::DomainError;
use super::node_storage::{InsertOutcome, NodeStorage};

/// Service for managing the node directory.
#[derive(Clone)]
pub struct Service {
    storage: Arc<NodeStorage>,
}

impl Service {
    /// Create a service over an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(Arc::new(NodeStorage::new()))
    }

    #[must_use]
    pub fn with_storage(storage: Arc<NodeStorage>) -> Self {
        Self { storage }
    }

    /// Add or replace a node, keyed by its endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the record breaks a registration
    /// rule; the directory is left unchanged in that case.
    pub fn insert(&self, record: NodeRecord) -> Result<InsertOutcome, DomainError> {
        record.validate()?;

        let name = record.name.clone();
        let endpoint_url = record.endpoint_url.clone();
        let outcome = self.storage.insert(record);

        tracing::info!(
            %name,
            %endpoint_url,
            replaced = outcome == InsertOutcome::Replaced,
            "Node registered in directory"
        );
        Ok(outcome)
    }

    /// Snapshot of every known node.
    #[must_use]
    pub fn list_all(&self) -> Vec<NodeRecord> {
        self.storage.list_all()
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}
