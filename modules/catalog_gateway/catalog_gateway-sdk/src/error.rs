//! Public error types for the `catalog_gateway` module.

use node_directory_sdk::NodeDirectoryError;

/// Errors returned by the `CatalogGatewayClient`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogGatewayError {
    /// Registration input the caller can fix.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No execution path could serve the query.
    #[error("Query not accepted: no adapter can execute it")]
    QueryNotAcceptable,

    /// The engine reported failures; messages are verbatim and ordered.
    #[error("Query execution failed: {}", .0.join("; "))]
    QueryExecutionFailed(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<NodeDirectoryError> for CatalogGatewayError {
    fn from(e: NodeDirectoryError) -> Self {
        match e {
            NodeDirectoryError::Validation(msg) => Self::Validation(msg),
            NodeDirectoryError::Internal(msg) => Self::Internal(msg),
        }
    }
}

/// A raw catalog that could not be turned into its wire form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("catalog id is blank")]
    BlankId,

    #[error("dataset {index} is not a JSON object")]
    InvalidDataset { index: usize },

    #[error("property `{0}` collides with a reserved key")]
    ReservedKey(String),
}
