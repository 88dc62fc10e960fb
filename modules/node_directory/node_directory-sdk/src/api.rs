//! `NodeDirectoryClient` trait definition.

use async_trait::async_trait;

use crate::error::NodeDirectoryError;
use crate::models::NodeRecord;

/// Public API trait for the `node_directory` module.
#[async_trait]
pub trait NodeDirectoryClient: Send + Sync {
    /// Register a node. A node with the same endpoint URL is replaced.
    ///
    /// # Errors
    ///
    /// * `Validation` - If the record has an empty or non-absolute endpoint URL,
    ///   or a blank name
    async fn register_node(&self, record: NodeRecord) -> Result<(), NodeDirectoryError>;

    /// Snapshot of all registered nodes, in stable insertion order.
    ///
    /// # Errors
    ///
    /// * `Internal` - If the directory is unavailable
    async fn list_nodes(&self) -> Result<Vec<NodeRecord>, NodeDirectoryError>;
}
