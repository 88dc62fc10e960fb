use crate::domain::service::Service;
use async_trait::async_trait;
use catalog_gateway_sdk::{
    CatalogGatewayClient, CatalogGatewayError, CatalogQuery, ProjectedCatalog,
};
use node_directory_sdk::NodeRecord;
use std::sync::Arc;

/// Local client implementation for the catalog gateway
pub struct CatalogGatewayLocalClient {
    service: Arc<Service>,
}

impl CatalogGatewayLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CatalogGatewayClient for CatalogGatewayLocalClient {
    async fn query(
        &self,
        query: CatalogQuery,
    ) -> Result<Vec<ProjectedCatalog>, CatalogGatewayError> {
        self.service.query(&query).await.map_err(Into::into)
    }

    async fn register_node(&self, record: NodeRecord) -> Result<(), CatalogGatewayError> {
        self.service.register_node(record).await.map_err(Into::into)
    }

    async fn list_nodes(&self) -> Result<Vec<NodeRecord>, CatalogGatewayError> {
        self.service.list_nodes().await.map_err(Into::into)
    }
}
