use node_directory_sdk::NodeRecord;
use serde::{Deserialize, Serialize};

/// Configuration for the node directory module
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeDirectoryConfig {
    /// Nodes inserted into the directory at startup, in order.
    pub seed_nodes: Vec<SeedNodeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedNodeConfig {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub protocols: Vec<String>,
}

impl From<SeedNodeConfig> for NodeRecord {
    fn from(seed: SeedNodeConfig) -> Self {
        NodeRecord::new(seed.name, seed.url, seed.protocols)
    }
}
