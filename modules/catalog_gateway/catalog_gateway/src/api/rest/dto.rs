use catalog_gateway_sdk::{CatalogQuery, Criterion, ProjectedCatalog};
use node_directory_sdk::NodeRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One filter condition of a catalog query
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriterionDto {
    /// Catalog field (`id`, `participantId`, `origin`) or property key
    pub operand_left: String,
    /// One of `=`, `!=`, `in`, `like`
    pub operator: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub operand_right: Value,
}

/// Federated catalog query request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FederatedCatalogQueryDto {
    #[serde(default)]
    pub criteria: Vec<CriterionDto>,
}

/// Participant node, as accepted by `insert` and returned by `participants`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeDto {
    pub name: String,
    pub url: String,
    #[serde(default, alias = "protocols")]
    pub supported_protocols: Vec<String>,
}

/// Projected catalog (JSON-LD `dcat:Catalog` object)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct CatalogDto(pub Value);

impl From<CriterionDto> for Criterion {
    fn from(dto: CriterionDto) -> Self {
        Criterion::new(dto.operand_left, dto.operator, dto.operand_right)
    }
}

impl From<FederatedCatalogQueryDto> for CatalogQuery {
    fn from(dto: FederatedCatalogQueryDto) -> Self {
        CatalogQuery::new(dto.criteria.into_iter().map(Into::into).collect())
    }
}

impl From<NodeDto> for NodeRecord {
    fn from(dto: NodeDto) -> Self {
        NodeRecord::new(dto.name, dto.url, dto.supported_protocols)
    }
}

impl From<NodeRecord> for NodeDto {
    fn from(record: NodeRecord) -> Self {
        Self {
            name: record.name,
            url: record.endpoint_url,
            supported_protocols: record.protocols,
        }
    }
}

impl From<ProjectedCatalog> for CatalogDto {
    fn from(catalog: ProjectedCatalog) -> Self {
        Self(catalog.into_value())
    }
}
