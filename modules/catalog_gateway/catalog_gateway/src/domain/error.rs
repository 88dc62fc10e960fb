use catalog_gateway_sdk::CatalogGatewayError;
use node_directory_sdk::{NodeDirectoryError, RecordValidationError};

/// Domain-level errors for the catalog gateway
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No adapter can execute the query")]
    QueryNotAcceptable,

    #[error("Query execution failed with {} error(s)", .0.len())]
    QueryExecutionFailed(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RecordValidationError> for DomainError {
    fn from(e: RecordValidationError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<NodeDirectoryError> for DomainError {
    fn from(e: NodeDirectoryError) -> Self {
        match e {
            NodeDirectoryError::Validation(msg) => Self::Validation(msg),
            NodeDirectoryError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<DomainError> for CatalogGatewayError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::QueryNotAcceptable => Self::QueryNotAcceptable,
            DomainError::QueryExecutionFailed(errors) => Self::QueryExecutionFailed(errors),
            DomainError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_to_sdk_error_conversion() {
        let sdk: CatalogGatewayError =
            DomainError::QueryExecutionFailed(vec!["e1".to_owned(), "e2".to_owned()]).into();
        assert_eq!(
            sdk,
            CatalogGatewayError::QueryExecutionFailed(vec!["e1".to_owned(), "e2".to_owned()])
        );

        let sdk: CatalogGatewayError = DomainError::QueryNotAcceptable.into();
        assert_eq!(sdk, CatalogGatewayError::QueryNotAcceptable);
    }

    #[test]
    fn test_record_validation_maps_to_validation() {
        let err: DomainError = RecordValidationError::new("name", "must not be blank").into();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "name must not be blank"));
    }
}
