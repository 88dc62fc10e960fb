//! Configuration for the catalog gateway module.

use catalog_gateway_sdk::RawCatalog;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::time::Duration;

/// Catalog gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogGatewayConfig {
    /// Upper bound for a single cache adapter run.
    #[serde(default = "default_adapter_timeout", with = "fedcat_utils::humantime_serde")]
    pub adapter_timeout: Duration,

    /// JSON-LD `@context` attached to every projected catalog (prefix -> IRI).
    #[serde(default = "default_jsonld_context")]
    pub jsonld_context: BTreeMap<String, String>,

    /// Catalogs loaded into the cache at startup.
    pub seed_catalogs: Vec<SeedCatalogConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCatalogConfig {
    pub id: String,
    #[serde(default)]
    pub participant_id: Option<String>,
    /// Endpoint URL of the node the catalog belongs to.
    pub origin: String,
    #[serde(default)]
    pub datasets: Vec<Value>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl From<SeedCatalogConfig> for RawCatalog {
    fn from(seed: SeedCatalogConfig) -> Self {
        RawCatalog {
            id: seed.id,
            participant_id: seed.participant_id,
            origin: seed.origin,
            datasets: seed.datasets,
            properties: seed.properties,
        }
    }
}

fn default_adapter_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_jsonld_context() -> BTreeMap<String, String> {
    [
        ("dcat", "http://www.w3.org/ns/dcat#"),
        ("dct", "http://purl.org/dc/terms/"),
        ("dspace", "https://w3id.org/dspace/v0.8/"),
        ("odrl", "http://www.w3.org/ns/odrl/2/"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect()
}

impl Default for CatalogGatewayConfig {
    fn default() -> Self {
        Self {
            adapter_timeout: default_adapter_timeout(),
            jsonld_context: default_jsonld_context(),
            seed_catalogs: Vec::new(),
        }
    }
}
