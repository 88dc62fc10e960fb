use node_directory_sdk::{NodeDirectoryError, RecordValidationError};

/// Domain-level errors for the node directory
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid node: {0}")]
    Validation(#[from] RecordValidationError),
}

impl From<DomainError> for NodeDirectoryError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(v) => v.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_to_sdk_error_conversion() {
        let err = DomainError::from(RecordValidationError::new("name", "must not be blank"));
        let sdk_err: NodeDirectoryError = err.into();
        assert_eq!(
            sdk_err,
            NodeDirectoryError::Validation("name must not be blank".to_owned())
        );
    }
}
