use std::sync::Arc;

use async_trait::async_trait;
use catalog_gateway_sdk::{CatalogQuery, RawCatalog};

use super::criterion;
use super::store::CatalogCache;

/// One way of answering a catalog query.
#[async_trait]
pub trait CacheQueryAdapter: Send + Sync {
    /// Name used to prefix error messages.
    fn name(&self) -> &str;

    fn can_execute(&self, query: &CatalogQuery) -> bool;

    /// # Errors
    ///
    /// Any error is reported to the caller as a query execution failure.
    async fn execute(&self, query: &CatalogQuery) -> anyhow::Result<Vec<RawCatalog>>;
}

/// Filters the in-memory [`CatalogCache`] with the query's criteria.
pub struct InMemoryCacheAdapter {
    cache: Arc<CatalogCache>,
}

impl InMemoryCacheAdapter {
    #[must_use]
    pub fn new(cache: Arc<CatalogCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CacheQueryAdapter for InMemoryCacheAdapter {
    fn name(&self) -> &str {
        "in-memory-cache"
    }

    fn can_execute(&self, query: &CatalogQuery) -> bool {
        query.criteria.iter().all(criterion::is_supported)
    }

    async fn execute(&self, query: &CatalogQuery) -> anyhow::Result<Vec<RawCatalog>> {
        let mut catalogs = self.cache.snapshot();
        catalogs.retain(|raw| query.criteria.iter().all(|c| criterion::matches(c, raw)));
        Ok(catalogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_gateway_sdk::Criterion;

    fn adapter() -> InMemoryCacheAdapter {
        let cache = Arc::new(CatalogCache::new());
        cache.save(
            "http://a.example",
            vec![
                RawCatalog::new("a-1", "http://a.example").with_property("kind", "obd"),
                RawCatalog::new("a-2", "http://a.example").with_property("kind", "timeseries"),
            ],
        );
        cache.save(
            "http://b.example",
            vec![RawCatalog::new("b-1", "http://b.example").with_property("kind", "obd")],
        );
        InMemoryCacheAdapter::new(cache)
    }

    #[tokio::test]
    async fn empty_query_returns_whole_cache() {
        let result = adapter().execute(&CatalogQuery::all()).await.unwrap();
        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn all_criteria_must_match() {
        let query = CatalogQuery::new(vec![
            Criterion::new("kind", "=", "obd"),
            Criterion::new("origin", "=", "http://a.example"),
        ]);
        let ids: Vec<_> = adapter()
            .execute(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["a-1"]);
    }

    #[test]
    fn cannot_execute_unknown_operator() {
        let query = CatalogQuery::new(vec![Criterion::new("kind", "contains", "obd")]);
        assert!(!adapter().can_execute(&query));
        assert!(adapter().can_execute(&CatalogQuery::all()));
    }
}
