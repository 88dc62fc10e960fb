use crate::domain::service::Service;
use async_trait::async_trait;
use node_directory_sdk::{NodeDirectoryClient, NodeDirectoryError, NodeRecord};
use std::sync::Arc;

/// Local client implementation for the node directory
pub struct NodeDirectoryLocalClient {
    service: Arc<Service>,
}

impl NodeDirectoryLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl NodeDirectoryClient for NodeDirectoryLocalClient {
    async fn register_node(&self, record: NodeRecord) -> Result<(), NodeDirectoryError> {
        self.service.insert(record).map(|_| ()).map_err(Into::into)
    }

    async fn list_nodes(&self) -> Result<Vec<NodeRecord>, NodeDirectoryError> {
        Ok(self.service.list_all())
    }
}
