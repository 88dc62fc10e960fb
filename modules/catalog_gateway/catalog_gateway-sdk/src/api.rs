//! Traits at the gateway's seams.

use async_trait::async_trait;
use node_directory_sdk::NodeRecord;

use crate::error::{CatalogGatewayError, TransformError};
use crate::models::{CatalogQuery, ProjectedCatalog, QueryOutcome, RawCatalog};

/// Executes catalog queries against whatever backs the federated catalog.
///
/// Implementations fold every failure into [`QueryOutcome::Errors`]; the
/// gateway never sees a transport error.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    async fn execute(&self, query: &CatalogQuery) -> QueryOutcome;
}

/// Turns a raw catalog into its wire representation. Must be pure.
pub trait DocumentTransformer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`TransformError`] if the catalog cannot be represented.
    fn transform(&self, raw: &RawCatalog) -> Result<ProjectedCatalog, TransformError>;
}

/// Public API of the catalog gateway.
///
/// Obtained from the module and shared with transports as
/// `Arc<dyn CatalogGatewayClient>`.
#[async_trait]
pub trait CatalogGatewayClient: Send + Sync {
    /// Run a catalog query and return the projected catalogs.
    ///
    /// # Errors
    ///
    /// * `QueryNotAcceptable` - If no adapter can execute the query
    /// * `QueryExecutionFailed` - With the engine's messages, in order
    async fn query(
        &self,
        query: CatalogQuery,
    ) -> Result<Vec<ProjectedCatalog>, CatalogGatewayError>;

    /// Add a node to the directory, replacing any node with the same endpoint URL.
    ///
    /// # Errors
    ///
    /// * `Validation` - If the record breaks a registration rule
    async fn register_node(&self, record: NodeRecord) -> Result<(), CatalogGatewayError>;

    /// All known nodes.
    ///
    /// # Errors
    ///
    /// * `Internal` - If the directory is unavailable
    async fn list_nodes(&self) -> Result<Vec<NodeRecord>, CatalogGatewayError>;
}
