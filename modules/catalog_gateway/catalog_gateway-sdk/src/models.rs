//! Query and catalog models shared by the gateway and its collaborators.

use serde_json::{Map, Value};

/// One filter condition: `operand_left operator operand_right`.
///
/// The gateway never interprets criteria; the query engine does.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub operand_left: String,
    pub operator: String,
    pub operand_right: Value,
}

impl Criterion {
    #[must_use]
    pub fn new(
        operand_left: impl Into<String>,
        operator: impl Into<String>,
        operand_right: impl Into<Value>,
    ) -> Self {
        Self {
            operand_left: operand_left.into(),
            operator: operator.into(),
            operand_right: operand_right.into(),
        }
    }
}

/// A catalog query. All criteria must hold; no criteria selects everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub criteria: Vec<Criterion>,
}

impl CatalogQuery {
    #[must_use]
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    /// Query without criteria.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }
}

/// A catalog as fetched from a node, before projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCatalog {
    pub id: String,
    pub participant_id: Option<String>,
    /// Endpoint URL of the node that served the catalog.
    pub origin: String,
    /// Dataset descriptions; each is expected to be a JSON object.
    pub datasets: Vec<Value>,
    /// Any further catalog-level attributes.
    pub properties: Map<String, Value>,
}

impl RawCatalog {
    #[must_use]
    pub fn new(id: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            origin: origin.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_participant_id(mut self, participant_id: impl Into<String>) -> Self {
        self.participant_id = Some(participant_id.into());
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Value) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Wire representation of one catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedCatalog(Value);

impl ProjectedCatalog {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Result of running a query through the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// No execution path can serve the query.
    NoAdapterFound,
    /// Execution failed; messages are kept in the order reported.
    Errors(Vec<String>),
    /// Execution succeeded, possibly with no catalogs.
    Success(Vec<RawCatalog>),
}
