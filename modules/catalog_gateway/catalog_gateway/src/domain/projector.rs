use std::sync::Arc;

use catalog_gateway_sdk::{DocumentTransformer, ProjectedCatalog, RawCatalog};

/// Maps raw catalogs to their wire form, one at a time.
///
/// A catalog the transformer rejects is dropped and logged; the rest keep
/// their input order.
#[derive(Clone)]
pub struct ResultProjector {
    transformer: Arc<dyn DocumentTransformer>,
}

impl ResultProjector {
    #[must_use]
    pub fn new(transformer: Arc<dyn DocumentTransformer>) -> Self {
        Self { transformer }
    }

    #[must_use]
    pub fn project(&self, docs: &[RawCatalog]) -> Vec<ProjectedCatalog> {
        docs.iter()
            .filter_map(|raw| match self.transformer.transform(raw) {
                Ok(projected) => Some(projected),
                Err(e) => {
                    tracing::warn!(
                        catalog_id = %raw.id,
                        origin = %raw.origin,
                        error = %e,
                        "Dropping catalog that failed to transform"
                    );
                    None
                }
            })
            .collect()
    }
}
