//! Transport-agnostic node model.

use crate::error::RecordValidationError;

/// One remote participant endpoint whose catalog can be queried.
///
/// `endpoint_url` is the node's identity: two records with the same URL
/// describe the same logical node. `name` and `protocols` carry no
/// uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    /// Human-readable label.
    pub name: String,
    /// Absolute URL of the node's catalog/protocol endpoint.
    pub endpoint_url: String,
    /// Protocol identifiers the node speaks, in preference order.
    pub protocols: Vec<String>,
}

impl NodeRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        endpoint_url: impl Into<String>,
        protocols: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint_url: endpoint_url.into(),
            protocols,
        }
    }

    /// Checks the registration rules: a non-blank name, an absolute endpoint
    /// URL with a host and no surrounding whitespace, and no blank protocol
    /// identifiers.
    ///
    /// # Errors
    ///
    /// Returns the first rule the record breaks.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.endpoint_url.trim().is_empty() {
            return Err(RecordValidationError::new(
                "endpoint_url",
                "must not be empty",
            ));
        }
        if self.endpoint_url.trim() != self.endpoint_url {
            return Err(RecordValidationError::new(
                "endpoint_url",
                "must not have leading or trailing whitespace",
            ));
        }

        let parsed = url::Url::parse(&self.endpoint_url).map_err(|e| {
            RecordValidationError::new("endpoint_url", format!("is not an absolute URL: {e}"))
        })?;
        if parsed.host().is_none() {
            return Err(RecordValidationError::new(
                "endpoint_url",
                "must include a host",
            ));
        }

        if self.name.trim().is_empty() {
            return Err(RecordValidationError::new("name", "must not be blank"));
        }

        if let Some(pos) = self.protocols.iter().position(|p| p.trim().is_empty()) {
            return Err(RecordValidationError::new(
                "protocols",
                format!("entry {pos} must not be blank"),
            ));
        }

        Ok(())
    }
}
