use std::sync::Arc;

use catalog_gateway_sdk::{CatalogQuery, ProjectedCatalog, QueryEngine, QueryOutcome};
use node_directory_sdk::{NodeDirectoryClient, NodeRecord};

use super::error::DomainError;
use super::projector::ResultProjector;

/// Query gateway service.
///
/// Holds no state of its own: queries go to the engine, node operations go to
/// the directory client.
#[derive(Clone)]
pub struct Service {
    engine: Arc<dyn QueryEngine>,
    projector: ResultProjector,
    directory: Arc<dyn NodeDirectoryClient>,
}

impl Service {
    #[must_use]
    pub fn new(
        engine: Arc<dyn QueryEngine>,
        projector: ResultProjector,
        directory: Arc<dyn NodeDirectoryClient>,
    ) -> Self {
        Self {
            engine,
            projector,
            directory,
        }
    }

    /// Run a catalog query and project the results.
    ///
    /// # Errors
    ///
    /// - [`DomainError::QueryNotAcceptable`] when no adapter can serve the query
    /// - [`DomainError::QueryExecutionFailed`] with the engine's messages, in order
    #[tracing::instrument(skip_all, fields(criteria = query.criteria.len()))]
    pub async fn query(&self, query: &CatalogQuery) -> Result<Vec<ProjectedCatalog>, DomainError> {
        match self.engine.execute(query).await {
            QueryOutcome::NoAdapterFound => {
                tracing::debug!("No adapter found for catalog query");
                Err(DomainError::QueryNotAcceptable)
            }
            QueryOutcome::Errors(errors) => {
                tracing::warn!(errors = errors.len(), "Catalog query failed");
                Err(DomainError::QueryExecutionFailed(errors))
            }
            QueryOutcome::Success(docs) => {
                let projected = self.projector.project(&docs);
                tracing::debug!(
                    fetched = docs.len(),
                    returned = projected.len(),
                    "Catalog query succeeded"
                );
                Ok(projected)
            }
        }
    }

    /// Validate a node and hand it to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for a malformed record.
    pub async fn register_node(&self, record: NodeRecord) -> Result<(), DomainError> {
        record.validate()?;
        self.directory.register_node(record).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates directory failures as [`DomainError::Internal`].
    pub async fn list_nodes(&self) -> Result<Vec<NodeRecord>, DomainError> {
        Ok(self.directory.list_nodes().await?)
    }
}
