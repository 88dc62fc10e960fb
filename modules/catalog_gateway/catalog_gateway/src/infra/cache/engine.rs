use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use catalog_gateway_sdk::{CatalogQuery, QueryEngine, QueryOutcome};
use futures::future::join_all;

use super::adapter::CacheQueryAdapter;

/// Runs a query on every adapter able to execute it and merges the results.
pub struct CacheQueryEngine {
    adapters: Vec<Arc<dyn CacheQueryAdapter>>,
    adapter_timeout: Duration,
}

impl CacheQueryEngine {
    #[must_use]
    pub fn new(adapters: Vec<Arc<dyn CacheQueryAdapter>>, adapter_timeout: Duration) -> Self {
        Self {
            adapters,
            adapter_timeout,
        }
    }
}

#[async_trait]
impl QueryEngine for CacheQueryEngine {
    async fn execute(&self, query: &CatalogQuery) -> QueryOutcome {
        let capable: Vec<_> = self
            .adapters
            .iter()
            .filter(|adapter| adapter.can_execute(query))
            .collect();

        if capable.is_empty() {
            return QueryOutcome::NoAdapterFound;
        }

        let runs = capable.into_iter().map(|adapter| async move {
            let name = adapter.name();
            match tokio::time::timeout(self.adapter_timeout, adapter.execute(query)).await {
                Ok(Ok(catalogs)) => Ok(catalogs),
                Ok(Err(e)) => Err(format!("{name}: {e:#}")),
                Err(_) => Err(format!(
                    "{name}: timed out after {}ms",
                    self.adapter_timeout.as_millis()
                )),
            }
        });

        let mut catalogs = Vec::new();
        let mut errors = Vec::new();
        for result in join_all(runs).await {
            match result {
                Ok(found) => catalogs.extend(found),
                Err(message) => errors.push(message),
            }
        }

        if errors.is_empty() {
            QueryOutcome::Success(catalogs)
        } else {
            QueryOutcome::Errors(errors)
        }
    }
}
