use catalog_gateway_sdk::RawCatalog;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Catalogs last fetched from each node, keyed by the node's endpoint URL.
#[derive(Default)]
pub struct CatalogCache {
    by_origin: RwLock<BTreeMap<String, Vec<RawCatalog>>>,
}

impl CatalogCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything cached for `origin`.
    pub fn save(&self, origin: impl Into<String>, catalogs: Vec<RawCatalog>) {
        let origin = origin.into();
        tracing::debug!(%origin, catalogs = catalogs.len(), "Catalog cache updated");
        self.by_origin.write().insert(origin, catalogs);
    }

    /// Every cached catalog, ordered by origin and then by insertion.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RawCatalog> {
        self.by_origin.read().values().flatten().cloned().collect()
    }

    #[must_use]
    pub fn catalog_count(&self) -> usize {
        self.by_origin.read().values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_per_origin() {
        let cache = CatalogCache::new();
        cache.save(
            "http://b.example",
            vec![RawCatalog::new("b-1", "http://b.example")],
        );
        cache.save(
            "http://a.example",
            vec![
                RawCatalog::new("a-1", "http://a.example"),
                RawCatalog::new("a-2", "http://a.example"),
            ],
        );
        assert_eq!(cache.catalog_count(), 3);

        cache.save("http://b.example", vec![]);

        let ids: Vec<_> = cache.snapshot().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["a-1", "a-2"]);
    }
}
