//! Public error types for the `node_directory` module.

/// A node record that breaks one of the registration rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {reason}")]
pub struct RecordValidationError {
    /// Offending field, named as in the record.
    pub field: &'static str,
    pub reason: String,
}

impl RecordValidationError {
    #[must_use]
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors that can be returned by the `NodeDirectoryClient`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeDirectoryError {
    #[error("Invalid node: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RecordValidationError> for NodeDirectoryError {
    fn from(e: RecordValidationError) -> Self {
        Self::Validation(e.to_string())
    }
}
