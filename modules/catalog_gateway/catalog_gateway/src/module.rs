use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Result, bail};
use catalog_gateway_sdk::{CatalogGatewayClient, DocumentTransformer, QueryEngine, RawCatalog};
use node_directory_sdk::NodeDirectoryClient;

use crate::config::CatalogGatewayConfig;
use crate::domain::local_client::CatalogGatewayLocalClient;
use crate::domain::projector::ResultProjector;
use crate::domain::service::Service;
use crate::infra::cache::{CacheQueryAdapter, CacheQueryEngine, CatalogCache, InMemoryCacheAdapter};
use crate::infra::transform::JsonCatalogTransformer;

/// Catalog Gateway Module
///
/// Wires the query gateway service to its engine, transformer and node
/// directory, and exposes:
/// - [`CatalogGatewayClient`] for in-process callers
/// - the REST router (query, insert, participants, `OpenAPI` document)
pub struct CatalogGateway {
    service: Arc<Service>,
    client: Arc<dyn CatalogGatewayClient>,
    cache: Arc<CatalogCache>,
}

impl CatalogGateway {
    /// Build the module with the cache-backed engine and the JSON transformer.
    ///
    /// # Errors
    ///
    /// Fails if a seed catalog has a blank id or origin.
    pub fn init(
        cfg: &CatalogGatewayConfig,
        directory: Arc<dyn NodeDirectoryClient>,
    ) -> Result<Self> {
        let cache = Arc::new(CatalogCache::new());

        let mut seeded: BTreeMap<String, Vec<RawCatalog>> = BTreeMap::new();
        for (pos, seed) in cfg.seed_catalogs.iter().enumerate() {
            if seed.id.trim().is_empty() || seed.origin.trim().is_empty() {
                bail!("invalid seed catalog #{pos}: id and origin must not be blank");
            }
            seeded
                .entry(seed.origin.clone())
                .or_default()
                .push(seed.clone().into());
        }
        for (origin, catalogs) in seeded {
            cache.save(origin, catalogs);
        }

        let adapters: Vec<Arc<dyn CacheQueryAdapter>> =
            vec![Arc::new(InMemoryCacheAdapter::new(Arc::clone(&cache)))];
        let engine = Arc::new(CacheQueryEngine::new(adapters, cfg.adapter_timeout));
        let transformer = Arc::new(JsonCatalogTransformer::new(&cfg.jsonld_context));

        let module = Self::with_cache(engine, transformer, directory, cache);
        tracing::info!(
            cached_catalogs = module.cache.catalog_count(),
            adapter_timeout_ms = u64::try_from(cfg.adapter_timeout.as_millis()).unwrap_or(u64::MAX),
            "Catalog gateway module initialized"
        );
        Ok(module)
    }

    /// Build the module around caller-provided collaborators.
    ///
    /// The catalog cache stays empty and unused.
    #[must_use]
    pub fn with_collaborators(
        engine: Arc<dyn QueryEngine>,
        transformer: Arc<dyn DocumentTransformer>,
        directory: Arc<dyn NodeDirectoryClient>,
    ) -> Self {
        Self::with_cache(engine, transformer, directory, Arc::new(CatalogCache::new()))
    }

    fn with_cache(
        engine: Arc<dyn QueryEngine>,
        transformer: Arc<dyn DocumentTransformer>,
        directory: Arc<dyn NodeDirectoryClient>,
        cache: Arc<CatalogCache>,
    ) -> Self {
        let service = Arc::new(Service::new(
            engine,
            ResultProjector::new(transformer),
            directory,
        ));
        let client: Arc<dyn CatalogGatewayClient> =
            Arc::new(CatalogGatewayLocalClient::new(Arc::clone(&service)));

        Self {
            service,
            client,
            cache,
        }
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn CatalogGatewayClient> {
        Arc::clone(&self.client)
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// The catalog cache answering queries, for whatever keeps it filled.
    #[must_use]
    pub fn cache(&self) -> Arc<CatalogCache> {
        Arc::clone(&self.cache)
    }

    /// REST routes, to be nested under `base_path`.
    #[must_use]
    pub fn router(&self, base_path: &str) -> axum::Router {
        let router = crate::api::rest::routes::router(self.service(), base_path);
        tracing::info!(%base_path, "Catalog gateway REST routes registered");
        router
    }
}
