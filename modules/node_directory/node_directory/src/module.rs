use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::NodeDirectoryConfig;
use crate::domain::local_client::NodeDirectoryLocalClient;
use crate::domain::service::Service;
use node_directory_sdk::{NodeDirectoryClient, NodeRecord};

/// Node Directory Module
///
/// Owns the directory service and hands out the client other modules use.
pub struct NodeDirectory {
    service: Arc<Service>,
    client: Arc<dyn NodeDirectoryClient>,
}

impl NodeDirectory {
    /// Build the module and insert the configured seed nodes.
    ///
    /// # Errors
    ///
    /// Fails if any seed node is invalid.
    pub fn init(cfg: &NodeDirectoryConfig) -> Result<Self> {
        let service = Arc::new(Service::new());

        for (pos, seed) in cfg.seed_nodes.iter().enumerate() {
            let record = NodeRecord::from(seed.clone());
            service
                .insert(record)
                .with_context(|| format!("invalid seed node #{pos} ({})", seed.url))?;
        }

        let client: Arc<dyn NodeDirectoryClient> =
            Arc::new(NodeDirectoryLocalClient::new(Arc::clone(&service)));

        tracing::info!(
            seeded = cfg.seed_nodes.len(),
            "Node directory module initialized"
        );
        Ok(Self { service, client })
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn NodeDirectoryClient> {
        Arc::clone(&self.client)
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }
}
